use thiserror::Error;

use crate::model::{ExamConfigError, GlossaryError, QuestionError, ThemeError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    ExamConfig(#[from] ExamConfigError),
    #[error(transparent)]
    Glossary(#[from] GlossaryError),
}
