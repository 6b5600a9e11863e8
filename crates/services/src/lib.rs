#![forbid(unsafe_code)]

pub mod catalog_service;
pub mod error;
pub mod exam;
pub mod flashcard_service;

pub use histo_core::Clock;

pub use catalog_service::{CatalogService, ThemeSummary};
pub use error::{ExamBuildError, ExamSessionError};
pub use exam::{
    CountdownTimer, ExamBuilder, ExamHandoff, ExamPhase, ExamSession, Finalize,
    RUNNING_LOW_SECONDS, TimerHandle,
};
pub use flashcard_service::{DeckKind, FlashcardService};
