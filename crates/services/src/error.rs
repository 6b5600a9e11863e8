//! Shared error types for the services crate.

use thiserror::Error;

use histo_core::model::ExamConfigError;

/// Errors emitted by `ExamBuilder`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamBuildError {
    #[error(transparent)]
    Config(#[from] ExamConfigError),

    #[error(
        "requested {requested} questions but only {available} are available for the selected themes"
    )]
    NotEnoughQuestions { requested: usize, available: usize },
}

/// Errors emitted by `ExamSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamSessionError {
    #[error("exam session already completed")]
    Completed,

    #[error("exam session is not complete")]
    Incomplete,

    #[error("choice index {index} is out of range for {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },

    #[error("cannot advance before the current question is finalized")]
    NotFinalized,
}
