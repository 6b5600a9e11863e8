use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use histo_core::model::{ExamConfig, ExamResult};

/// Typed slots carrying state between the exam screens.
///
/// Setup writes the configuration, the run screen takes it once; the run
/// writes the result, the results screen takes it once. A screen that finds
/// its slot empty redirects back to setup. Storing a new configuration is
/// the teardown point for the previous run: it clears any stale result.
#[derive(Clone, Default)]
pub struct ExamHandoff {
    config: Arc<Mutex<Option<ExamConfig>>>,
    result: Arc<Mutex<Option<ExamResult>>>,
}

impl ExamHandoff {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the configuration for the upcoming run and clears any result
    /// left over from a previous one.
    pub fn put_config(&self, config: ExamConfig) {
        debug!(
            "handing off exam config: {} questions, {}s each",
            config.question_count(),
            config.seconds_per_question()
        );
        *lock(&self.result) = None;
        *lock(&self.config) = Some(config);
    }

    /// Takes the pending configuration, leaving the slot empty.
    #[must_use]
    pub fn take_config(&self) -> Option<ExamConfig> {
        lock(&self.config).take()
    }

    pub fn put_result(&self, result: ExamResult) {
        *lock(&self.result) = Some(result);
    }

    /// Takes the pending result, leaving the slot empty.
    #[must_use]
    pub fn take_result(&self) -> Option<ExamResult> {
        lock(&self.result).take()
    }

    /// Empties both slots.
    pub fn clear(&self) {
        *lock(&self.config) = None;
        *lock(&self.result) = None;
    }
}

// The slots hold plain data; a poisoned lock cannot leave them inconsistent.
fn lock<T>(slot: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use histo_core::model::{SessionQuestion, ThemeId};
    use histo_core::time::fixed_now;

    fn config() -> ExamConfig {
        ExamConfig::new([ThemeId::new("cartilagem").unwrap()], 2, 30).unwrap()
    }

    fn result() -> ExamResult {
        ExamResult::from_questions(Vec::<SessionQuestion>::new(), fixed_now())
    }

    #[test]
    fn config_is_taken_once() {
        let handoff = ExamHandoff::new();
        handoff.put_config(config());

        assert!(handoff.take_config().is_some());
        assert!(handoff.take_config().is_none());
    }

    #[test]
    fn new_config_clears_stale_result() {
        let handoff = ExamHandoff::new();
        handoff.put_result(result());

        handoff.put_config(config());
        assert!(handoff.take_result().is_none());
    }

    #[test]
    fn clones_share_the_same_slots() {
        let handoff = ExamHandoff::new();
        let other = handoff.clone();
        handoff.put_result(result());

        assert!(other.take_result().is_some());
        assert!(handoff.take_result().is_none());
    }

    #[test]
    fn clear_empties_both_slots() {
        let handoff = ExamHandoff::new();
        handoff.put_config(config());
        handoff.put_result(result());

        handoff.clear();
        assert!(handoff.take_config().is_none());
        assert!(handoff.take_result().is_none());
    }
}
