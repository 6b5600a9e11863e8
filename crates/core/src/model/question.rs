use thiserror::Error;
use url::Url;

use crate::model::ids::QuestionId;
use crate::model::theme::ThemeId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least two choices, got {0}")]
    TooFewChoices(usize),

    #[error("choice text cannot be empty")]
    EmptyChoiceText,

    #[error("correct choice index {index} is out of range for {len} choices")]
    CorrectChoiceOutOfRange { index: usize, len: usize },

    #[error("image reference cannot be empty")]
    EmptyImageRef,

    #[error("image reference is not a valid URL: {0:?}")]
    InvalidImageUrl(String),
}

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

/// One answer alternative: the text shown during the run and the explanation
/// revealed in the review step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
    pub explanation: String,
}

impl Choice {
    #[must_use]
    pub fn new(text: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            explanation: explanation.into(),
        }
    }
}

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// Reference to a microscopy image: a bundled asset path or an absolute URL.
///
/// Display failures are a UI concern (placeholder rendering); this type only
/// guarantees the reference itself is well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyImageRef` for a blank reference and
    /// `QuestionError::InvalidImageUrl` when a scheme-qualified reference
    /// does not parse as a URL.
    pub fn new(raw: impl Into<String>) -> Result<Self, QuestionError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::EmptyImageRef);
        }
        if trimmed.contains("://") {
            Url::parse(trimmed).map_err(|_| QuestionError::InvalidImageUrl(trimmed.to_owned()))?;
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

fn validate(prompt: &str, choices: &[Choice], correct_choice: usize) -> Result<(), QuestionError> {
    if prompt.trim().is_empty() {
        return Err(QuestionError::EmptyPrompt);
    }
    if choices.len() < 2 {
        return Err(QuestionError::TooFewChoices(choices.len()));
    }
    if choices.iter().any(|choice| choice.text.trim().is_empty()) {
        return Err(QuestionError::EmptyChoiceText);
    }
    if correct_choice >= choices.len() {
        return Err(QuestionError::CorrectChoiceOutOfRange {
            index: correct_choice,
            len: choices.len(),
        });
    }
    Ok(())
}

/// A theoretical multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheoryQuestion {
    id: QuestionId,
    theme: ThemeId,
    prompt: String,
    level: String,
    subtopic: String,
    tags: Vec<String>,
    choices: Vec<Choice>,
    correct_choice: usize,
}

impl TheoryQuestion {
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is empty, fewer than two
    /// choices are given, or `correct_choice` is out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: QuestionId,
        theme: ThemeId,
        prompt: impl Into<String>,
        level: impl Into<String>,
        subtopic: impl Into<String>,
        tags: Vec<String>,
        choices: Vec<Choice>,
        correct_choice: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        validate(&prompt, &choices, correct_choice)?;
        Ok(Self {
            id,
            theme,
            prompt,
            level: level.into(),
            subtopic: subtopic.into(),
            tags,
            choices,
            correct_choice,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeId {
        &self.theme
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn subtopic(&self) -> &str {
        &self.subtopic
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn correct_choice(&self) -> usize {
        self.correct_choice
    }

    /// The correct alternative. The constructor guarantees the index is valid.
    #[must_use]
    pub fn correct(&self) -> &Choice {
        &self.choices[self.correct_choice]
    }
}

/// A practical question: a microscopy image plus its alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeQuestion {
    id: QuestionId,
    theme: ThemeId,
    image: ImageRef,
    prompt: String,
    choices: Vec<Choice>,
    correct_choice: usize,
}

impl PracticeQuestion {
    /// # Errors
    ///
    /// Returns `QuestionError` under the same conditions as
    /// [`TheoryQuestion::new`].
    pub fn new(
        id: QuestionId,
        theme: ThemeId,
        image: ImageRef,
        prompt: impl Into<String>,
        choices: Vec<Choice>,
        correct_choice: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        validate(&prompt, &choices, correct_choice)?;
        Ok(Self {
            id,
            theme,
            image,
            prompt,
            choices,
            correct_choice,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeId {
        &self.theme
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn correct_choice(&self) -> usize {
        self.correct_choice
    }

    #[must_use]
    pub fn correct(&self) -> &Choice {
        &self.choices[self.correct_choice]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<Choice> {
        vec![
            Choice::new("Simple squamous epithelium", "Single flat cell layer."),
            Choice::new("Stratified epithelium", "Multiple layers."),
        ]
    }

    fn theme() -> ThemeId {
        ThemeId::new("tecido-epitelial").unwrap()
    }

    #[test]
    fn theory_question_validates_correct_index() {
        let err = TheoryQuestion::new(
            QuestionId::new(1),
            theme(),
            "Which epithelium lines blood vessels?",
            "easy",
            "epithelium",
            vec![],
            choices(),
            2,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::CorrectChoiceOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn theory_question_requires_two_choices() {
        let err = TheoryQuestion::new(
            QuestionId::new(1),
            theme(),
            "Prompt",
            "easy",
            "epithelium",
            vec![],
            vec![Choice::new("Only one", "")],
            0,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::TooFewChoices(1));
    }

    #[test]
    fn practice_question_exposes_correct_choice() {
        let question = PracticeQuestion::new(
            QuestionId::new(7),
            theme(),
            ImageRef::new("/images/tecido-epitelial/lamina-01.jpg").unwrap(),
            "Identify the tissue in the slide.",
            choices(),
            0,
        )
        .unwrap();
        assert_eq!(question.correct().text, "Simple squamous epithelium");
    }

    #[test]
    fn image_ref_rejects_blank_and_bad_urls() {
        assert_eq!(ImageRef::new("  "), Err(QuestionError::EmptyImageRef));
        assert!(matches!(
            ImageRef::new("http://"),
            Err(QuestionError::InvalidImageUrl(_))
        ));
        assert!(ImageRef::new("/images/slide.jpg").is_ok());
        assert!(ImageRef::new("https://example.org/slide.jpg").is_ok());
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let err = PracticeQuestion::new(
            QuestionId::new(1),
            theme(),
            ImageRef::new("/images/slide.jpg").unwrap(),
            "   ",
            choices(),
            0,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }
}
