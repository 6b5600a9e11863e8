mod exam;
mod exam_result;
mod flashcard;
mod glossary;
mod ids;
mod question;
mod theme;

pub use ids::QuestionId;
pub use theme::{Theme, ThemeError, ThemeId};

pub use question::{Choice, ImageRef, PracticeQuestion, QuestionError, TheoryQuestion};

pub use exam::{
    ExamConfig, ExamConfigError, SessionQuestion, MAX_SECONDS_PER_QUESTION,
    MIN_SECONDS_PER_QUESTION,
};
pub use exam_result::ExamResult;
pub use flashcard::{Flashcard, FlashcardBack, FlashcardFront};
pub use glossary::{GlossaryError, GlossaryTerm};
