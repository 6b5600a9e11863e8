use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use histo_core::model::{ExamResult, SessionQuestion};
use services::{
    CountdownTimer, ExamPhase, ExamSession, ExamSessionError, Finalize, TimerHandle,
};

/// How long the "answer recorded" acknowledgement stays on screen before the
/// run auto-advances.
pub const ANSWER_ACK_DELAY: Duration = Duration::from_secs(1);

/// Same for the "time up" notice, a little longer so it can be read.
pub const TIMEOUT_ACK_DELAY: Duration = Duration::from_secs(2);

/// Why the current question stopped accepting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    Answered,
    TimedOut,
}

/// Drives one exam run: owns the session state machine plus the countdown
/// for the question on screen.
///
/// All methods run on the UI event loop; the countdown task only talks back
/// through its watch channel and the timeout callback handed to
/// [`ExamVm::start_timer`]. Stale timeout deliveries are dropped by the
/// generation check before they ever reach the session.
pub struct ExamVm {
    session: Option<ExamSession>,
    timer: CountdownTimer,
    handle: Option<TimerHandle>,
}

impl ExamVm {
    #[must_use]
    pub fn new(session: ExamSession) -> Self {
        Self {
            session: Some(session),
            timer: CountdownTimer::new(),
            handle: None,
        }
    }

    /// Starts a fresh countdown for the question on screen, replacing (and
    /// thereby cancelling) the previous one. Returns a receiver for the
    /// remaining-seconds stream.
    pub fn start_timer(
        &mut self,
        on_timeout: impl FnOnce(u64) + Send + 'static,
    ) -> watch::Receiver<u32> {
        let seconds = self
            .session
            .as_ref()
            .map_or(0, |session| session.config().seconds_per_question());
        let handle = self.timer.start(seconds, on_timeout);
        let rx = handle.subscribe();
        self.handle = Some(handle);
        rx
    }

    /// Records an answer for the current question.
    ///
    /// Returns the acknowledgement delay to wait before advancing, or `None`
    /// when the question was already finalized (the countdown won the race)
    /// and nothing changed.
    ///
    /// # Errors
    ///
    /// Propagates `ExamSessionError` for an out-of-range choice or a
    /// completed session.
    pub fn answer(&mut self, choice: usize) -> Result<Option<Duration>, ExamSessionError> {
        let remaining = self.handle.as_ref().map_or(0, TimerHandle::remaining);
        let Some(session) = self.session.as_mut() else {
            return Err(ExamSessionError::Completed);
        };
        match session.record_answer(choice, remaining)? {
            Finalize::Recorded => {
                // Stop the countdown; its callback can no longer fire.
                self.handle = None;
                Ok(Some(ANSWER_ACK_DELAY))
            }
            Finalize::Ignored => Ok(None),
        }
    }

    /// Handles a timeout delivery from the countdown task.
    ///
    /// A delivery whose generation does not match the countdown currently on
    /// screen is stale (the question already moved on) and is dropped.
    /// Returns the acknowledgement delay when the timeout was recorded.
    pub fn timeout(&mut self, generation: u64) -> Option<Duration> {
        let current = self.handle.as_ref().map(TimerHandle::generation)?;
        if current != generation {
            return None;
        }
        let session = self.session.as_mut()?;
        match session.record_timeout() {
            Ok(Finalize::Recorded) => {
                self.handle = None;
                Some(TIMEOUT_ACK_DELAY)
            }
            Ok(Finalize::Ignored) | Err(_) => None,
        }
    }

    /// Moves to the next question or the terminal state.
    ///
    /// # Errors
    ///
    /// Propagates `ExamSessionError` when the current question is still open
    /// or the session already completed.
    pub fn advance(&mut self) -> Result<ExamPhase, ExamSessionError> {
        let Some(session) = self.session.as_mut() else {
            return Err(ExamSessionError::Completed);
        };
        session.advance()
    }

    /// Scores and consumes the completed session.
    #[must_use]
    pub fn finish(&mut self, completed_at: DateTime<Utc>) -> Option<ExamResult> {
        self.handle = None;
        let session = self.session.take()?;
        match session.into_result(completed_at) {
            Ok(result) => Some(result),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.session.as_ref().and_then(ExamSession::current_question)
    }

    /// 1-based position for the "Questão i de N" heading.
    #[must_use]
    pub fn position(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.current_index() + 1)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.as_ref().map_or(0, ExamSession::total)
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.session
            .as_ref()
            .map_or(0, |session| session.config().seconds_per_question())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.as_ref().is_none_or(ExamSession::is_complete)
    }

    /// Why the current question is locked, if it is.
    #[must_use]
    pub fn lock_reason(&self) -> Option<LockReason> {
        let question = self.current_question()?;
        if !question.is_answered() {
            return None;
        }
        if question.selected_choice().is_some() {
            Some(LockReason::Answered)
        } else {
            Some(LockReason::TimedOut)
        }
    }
}
