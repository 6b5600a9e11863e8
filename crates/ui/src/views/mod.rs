mod exam_result;
mod exam_run;
mod exam_setup;
mod flashcards;
mod glossary;
mod home;
mod practice_questions;
mod theory_questions;

pub use exam_result::ExamResultView;
pub use exam_run::ExamRunView;
pub use exam_setup::ExamSetupView;
pub use flashcards::FlashcardsView;
pub use glossary::GlossaryView;
pub use home::HomeView;
pub use practice_questions::PracticeQuestionsView;
pub use theory_questions::TheoryQuestionsView;
