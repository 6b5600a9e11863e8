//! Serde shapes for the bundled JSON documents and their mapping into
//! domain types. Validation happens here so malformed content never reaches
//! the rest of the application.

use serde::Deserialize;
use thiserror::Error;

use histo_core::model::{
    Choice, GlossaryError, GlossaryTerm, ImageRef, PracticeQuestion, QuestionError, QuestionId,
    ThemeError, ThemeId, TheoryQuestion,
};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("malformed document for {context}: {source}")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid question {id} in theme {theme}: {source}")]
    InvalidQuestion {
        theme: ThemeId,
        id: u32,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    InvalidTerm(#[from] GlossaryError),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

//
// ─── DOCUMENT SHAPES ───────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ChoiceDoc {
    pub text: String,
    #[serde(default)]
    pub explanation: String,
}

impl From<ChoiceDoc> for Choice {
    fn from(doc: ChoiceDoc) -> Self {
        Choice::new(doc.text, doc.explanation)
    }
}

#[derive(Debug, Deserialize)]
pub struct TheoryQuestionDoc {
    pub id: u32,
    pub prompt: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub subtopic: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub choices: Vec<ChoiceDoc>,
    pub correct_choice: usize,
}

impl TheoryQuestionDoc {
    /// # Errors
    ///
    /// Returns `ContentError::InvalidQuestion` when domain validation fails.
    pub fn into_domain(self, theme: &ThemeId) -> Result<TheoryQuestion, ContentError> {
        let id = self.id;
        TheoryQuestion::new(
            QuestionId::new(id),
            theme.clone(),
            self.prompt,
            self.level,
            self.subtopic,
            self.tags,
            self.choices.into_iter().map(Choice::from).collect(),
            self.correct_choice,
        )
        .map_err(|source| ContentError::InvalidQuestion {
            theme: theme.clone(),
            id,
            source,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PracticeQuestionDoc {
    pub id: u32,
    pub image: String,
    pub prompt: String,
    pub choices: Vec<ChoiceDoc>,
    pub correct_choice: usize,
}

impl PracticeQuestionDoc {
    /// # Errors
    ///
    /// Returns `ContentError::InvalidQuestion` when domain validation fails.
    pub fn into_domain(self, theme: &ThemeId) -> Result<PracticeQuestion, ContentError> {
        let id = self.id;
        let map_err = |source| ContentError::InvalidQuestion {
            theme: theme.clone(),
            id,
            source,
        };
        let image = ImageRef::new(self.image).map_err(map_err)?;
        PracticeQuestion::new(
            QuestionId::new(id),
            theme.clone(),
            image,
            self.prompt,
            self.choices.into_iter().map(Choice::from).collect(),
            self.correct_choice,
        )
        .map_err(|source| ContentError::InvalidQuestion {
            theme: theme.clone(),
            id,
            source,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct GlossaryTermDoc {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub category: String,
}

//
// ─── PARSERS ───────────────────────────────────────────────────────────────────
//

/// # Errors
///
/// Returns `ContentError` when the JSON is malformed or a question fails
/// domain validation.
pub fn parse_theory(raw: &str, theme: &ThemeId) -> Result<Vec<TheoryQuestion>, ContentError> {
    let docs: Vec<TheoryQuestionDoc> =
        serde_json::from_str(raw).map_err(|source| ContentError::Malformed {
            context: format!("{theme}/theory"),
            source,
        })?;
    docs.into_iter().map(|doc| doc.into_domain(theme)).collect()
}

/// # Errors
///
/// Returns `ContentError` when the JSON is malformed or a question fails
/// domain validation.
pub fn parse_practice(raw: &str, theme: &ThemeId) -> Result<Vec<PracticeQuestion>, ContentError> {
    let docs: Vec<PracticeQuestionDoc> =
        serde_json::from_str(raw).map_err(|source| ContentError::Malformed {
            context: format!("{theme}/practice"),
            source,
        })?;
    docs.into_iter().map(|doc| doc.into_domain(theme)).collect()
}

/// # Errors
///
/// Returns `ContentError` when the JSON is malformed or an entry is blank.
pub fn parse_glossary(raw: &str) -> Result<Vec<GlossaryTerm>, ContentError> {
    let docs: Vec<GlossaryTermDoc> =
        serde_json::from_str(raw).map_err(|source| ContentError::Malformed {
            context: "glossary".to_owned(),
            source,
        })?;
    docs.into_iter()
        .map(|doc| Ok(GlossaryTerm::new(doc.term, doc.definition, doc.category)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> ThemeId {
        ThemeId::new("tecido-epitelial").unwrap()
    }

    #[test]
    fn practice_doc_round_trips_into_domain() {
        let raw = r#"[
            {
                "id": 1,
                "image": "/images/tecido-epitelial/lamina-01.jpg",
                "prompt": "Identifique o epitélio.",
                "choices": [
                    { "text": "Epitélio simples pavimentoso", "explanation": "Uma camada de células achatadas." },
                    { "text": "Epitélio estratificado", "explanation": "Várias camadas." }
                ],
                "correct_choice": 0
            }
        ]"#;

        let questions = parse_practice(raw, &theme()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct().text, "Epitélio simples pavimentoso");
    }

    #[test]
    fn out_of_range_correct_choice_is_rejected() {
        let raw = r#"[
            {
                "id": 9,
                "image": "/images/x.jpg",
                "prompt": "Prompt",
                "choices": [ { "text": "A" }, { "text": "B" } ],
                "correct_choice": 5
            }
        ]"#;

        let err = parse_practice(raw, &theme()).unwrap_err();
        assert!(matches!(err, ContentError::InvalidQuestion { id: 9, .. }));
    }

    #[test]
    fn malformed_json_is_reported_with_context() {
        let err = parse_theory("not json", &theme()).unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
        assert!(err.to_string().contains("tecido-epitelial/theory"));
    }

    #[test]
    fn glossary_entries_parse() {
        let raw = r#"[
            { "term": "Osteócito", "definition": "Célula óssea madura.", "category": "Tecido Ósseo" }
        ]"#;
        let terms = parse_glossary(raw).unwrap();
        assert_eq!(terms[0].initial(), Some('O'));
    }
}
