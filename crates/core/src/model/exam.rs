use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::question::PracticeQuestion;
use crate::model::theme::ThemeId;

/// Bounds for the per-question countdown.
pub const MIN_SECONDS_PER_QUESTION: u32 = 10;
pub const MAX_SECONDS_PER_QUESTION: u32 = 300;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamConfigError {
    #[error("select at least one theme")]
    NoThemesSelected,

    #[error("question count must be at least 1")]
    ZeroQuestions,

    #[error(
        "seconds per question must be between {MIN_SECONDS_PER_QUESTION} and \
         {MAX_SECONDS_PER_QUESTION}, got {0}"
    )]
    SecondsOutOfRange(u32),
}

//
// ─── EXAM CONFIGURATION ────────────────────────────────────────────────────────
//

/// User-chosen exam parameters. Immutable once the session starts; whether
/// `question_count` fits the available pool is checked at build time, when the
/// pool is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamConfig {
    themes: BTreeSet<ThemeId>,
    question_count: usize,
    seconds_per_question: u32,
}

impl ExamConfig {
    /// # Errors
    ///
    /// Returns `ExamConfigError` when no theme is selected, the question
    /// count is zero, or the countdown is outside its bounds.
    pub fn new(
        themes: impl IntoIterator<Item = ThemeId>,
        question_count: usize,
        seconds_per_question: u32,
    ) -> Result<Self, ExamConfigError> {
        let themes: BTreeSet<ThemeId> = themes.into_iter().collect();
        if themes.is_empty() {
            return Err(ExamConfigError::NoThemesSelected);
        }
        if question_count == 0 {
            return Err(ExamConfigError::ZeroQuestions);
        }
        if !(MIN_SECONDS_PER_QUESTION..=MAX_SECONDS_PER_QUESTION).contains(&seconds_per_question) {
            return Err(ExamConfigError::SecondsOutOfRange(seconds_per_question));
        }
        Ok(Self {
            themes,
            question_count,
            seconds_per_question,
        })
    }

    #[must_use]
    pub fn themes(&self) -> &BTreeSet<ThemeId> {
        &self.themes
    }

    #[must_use]
    pub fn includes_theme(&self, theme: &ThemeId) -> bool {
        self.themes.contains(theme)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    #[must_use]
    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }
}

//
// ─── SESSION QUESTION ──────────────────────────────────────────────────────────
//

/// A sampled question plus the outcome recorded while the session runs.
///
/// Finalization is write-once: the first of answer/timeout wins and every
/// later attempt is a no-op, which is what resolves the race between a click
/// and the countdown reaching zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionQuestion {
    question: PracticeQuestion,
    selected_choice: Option<usize>,
    elapsed_seconds: Option<u32>,
    answered: bool,
}

impl SessionQuestion {
    #[must_use]
    pub fn new(question: PracticeQuestion) -> Self {
        Self {
            question,
            selected_choice: None,
            elapsed_seconds: None,
            answered: false,
        }
    }

    #[must_use]
    pub fn question(&self) -> &PracticeQuestion {
        &self.question
    }

    #[must_use]
    pub fn selected_choice(&self) -> Option<usize> {
        self.selected_choice
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> Option<u32> {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// True when a choice was selected and it matches the correct one.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected_choice == Some(self.question.correct_choice())
    }

    /// Records an answer. Returns `false` (and changes nothing) when the
    /// question is already finalized.
    pub fn finalize_answer(&mut self, choice: usize, elapsed_seconds: u32) -> bool {
        if self.answered {
            return false;
        }
        self.selected_choice = Some(choice);
        self.elapsed_seconds = Some(elapsed_seconds);
        self.answered = true;
        true
    }

    /// Records a timeout: full time spent, no selection. Returns `false`
    /// when the question is already finalized.
    pub fn finalize_timeout(&mut self, elapsed_seconds: u32) -> bool {
        if self.answered {
            return false;
        }
        self.elapsed_seconds = Some(elapsed_seconds);
        self.answered = true;
        true
    }
}
