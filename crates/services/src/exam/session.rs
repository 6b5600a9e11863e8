use chrono::{DateTime, Utc};
use std::fmt;

use histo_core::model::{ExamConfig, ExamResult, SessionQuestion};

use crate::error::ExamSessionError;

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamPhase {
    /// Question `i` is on screen and accepting exactly one finalization.
    Active(usize),
    Complete,
}

/// Outcome of a finalization attempt.
///
/// `Ignored` is the no-op arm of the answer/timeout race: whichever of the
/// two arrives second finds the question already finalized and changes
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finalize {
    Recorded,
    Ignored,
}

/// The timed exam run: an ordered question sequence and a cursor that only
/// moves forward.
///
/// The session owns all mutation during a run. Every question at an index
/// below the cursor is finalized; the current question is the only one that
/// accepts an answer or a timeout, and only once. The UI layer decides *when*
/// to call [`ExamSession::advance`] (it inserts its acknowledgement delay);
/// the machine itself is synchronous.
pub struct ExamSession {
    config: ExamConfig,
    questions: Vec<SessionQuestion>,
    current: usize,
    complete: bool,
}

impl ExamSession {
    pub(crate) fn new(config: ExamConfig, questions: Vec<SessionQuestion>) -> Self {
        // An empty session is complete by construction; the builder's pool
        // check makes this unreachable in practice.
        let complete = questions.is_empty();
        Self {
            config,
            questions,
            current: 0,
            complete,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ExamConfig {
        &self.config
    }

    #[must_use]
    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    #[must_use]
    pub fn phase(&self) -> ExamPhase {
        if self.complete {
            ExamPhase::Complete
        } else {
            ExamPhase::Active(self.current)
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&SessionQuestion> {
        if self.complete {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Records an answer for the current question.
    ///
    /// `remaining_seconds` is what the countdown still showed; elapsed time
    /// is derived from it. Returns `Finalize::Ignored` when the question was
    /// already finalized (the timeout won the race).
    ///
    /// # Errors
    ///
    /// Returns `ExamSessionError::Completed` after the terminal state and
    /// `ExamSessionError::ChoiceOutOfRange` for an invalid choice index.
    pub fn record_answer(
        &mut self,
        choice: usize,
        remaining_seconds: u32,
    ) -> Result<Finalize, ExamSessionError> {
        if self.complete {
            return Err(ExamSessionError::Completed);
        }
        let seconds_per_question = self.config.seconds_per_question();
        let question = &mut self.questions[self.current];
        let len = question.question().choices().len();
        if choice >= len {
            return Err(ExamSessionError::ChoiceOutOfRange { index: choice, len });
        }

        let elapsed = seconds_per_question.saturating_sub(remaining_seconds);
        if question.finalize_answer(choice, elapsed) {
            Ok(Finalize::Recorded)
        } else {
            Ok(Finalize::Ignored)
        }
    }

    /// Records a timeout for the current question: full time spent, no
    /// selection. Returns `Finalize::Ignored` when an answer already won the
    /// race.
    ///
    /// # Errors
    ///
    /// Returns `ExamSessionError::Completed` after the terminal state.
    pub fn record_timeout(&mut self) -> Result<Finalize, ExamSessionError> {
        if self.complete {
            return Err(ExamSessionError::Completed);
        }
        let seconds_per_question = self.config.seconds_per_question();
        let question = &mut self.questions[self.current];
        if question.finalize_timeout(seconds_per_question) {
            Ok(Finalize::Recorded)
        } else {
            Ok(Finalize::Ignored)
        }
    }

    /// Moves on after the current question was finalized, reaching
    /// `Complete` past the last index.
    ///
    /// # Errors
    ///
    /// Returns `ExamSessionError::NotFinalized` when the current question is
    /// still open and `ExamSessionError::Completed` after the terminal state.
    pub fn advance(&mut self) -> Result<ExamPhase, ExamSessionError> {
        if self.complete {
            return Err(ExamSessionError::Completed);
        }
        if !self.questions[self.current].is_answered() {
            return Err(ExamSessionError::NotFinalized);
        }
        if self.current + 1 >= self.questions.len() {
            self.complete = true;
        } else {
            self.current += 1;
        }
        Ok(self.phase())
    }

    /// Scores the finished run into an [`ExamResult`].
    ///
    /// # Errors
    ///
    /// Returns `ExamSessionError::Incomplete` before the terminal state.
    pub fn into_result(self, completed_at: DateTime<Utc>) -> Result<ExamResult, ExamSessionError> {
        if !self.complete {
            return Err(ExamSessionError::Incomplete);
        }
        Ok(ExamResult::from_questions(self.questions, completed_at))
    }
}

impl fmt::Debug for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamSession")
            .field("total", &self.questions.len())
            .field("current", &self.current)
            .field("complete", &self.complete)
            .finish_non_exhaustive()
    }
}
