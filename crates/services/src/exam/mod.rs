mod builder;
mod handoff;
mod session;
mod timer;

// Public API of the exam subsystem.
pub use crate::error::{ExamBuildError, ExamSessionError};
pub use builder::ExamBuilder;
pub use handoff::ExamHandoff;
pub use session::{ExamPhase, ExamSession, Finalize};
pub use timer::{CountdownTimer, RUNNING_LOW_SECONDS, TimerHandle};
