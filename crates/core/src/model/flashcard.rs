use crate::model::question::{ImageRef, PracticeQuestion, TheoryQuestion};
use crate::model::theme::ThemeId;

/// Front face of a flashcard: theoretical decks show the question prompt,
/// practical decks show the slide image with its prompt as caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashcardFront {
    Text(String),
    Image { image: ImageRef, caption: String },
}

/// Back face: the correct answer plus its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardBack {
    pub answer: String,
    pub explanation: String,
}

/// A study flashcard derived from a question; flashcards are never authored
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    id: String,
    theme: ThemeId,
    front: FlashcardFront,
    back: FlashcardBack,
    tags: Vec<String>,
}

impl Flashcard {
    /// Derives a flashcard from a theoretical question: prompt on the front,
    /// the correct alternative and its explanation on the back.
    #[must_use]
    pub fn from_theory(question: &TheoryQuestion) -> Self {
        let correct = question.correct();
        Self {
            id: format!("{}-{}", question.theme(), question.id()),
            theme: question.theme().clone(),
            front: FlashcardFront::Text(question.prompt().to_owned()),
            back: FlashcardBack {
                answer: correct.text.clone(),
                explanation: correct.explanation.clone(),
            },
            tags: question.tags().to_vec(),
        }
    }

    /// Derives a flashcard from a practical question: the slide image on the
    /// front (prompt as caption), the correct alternative on the back.
    #[must_use]
    pub fn from_practice(question: &PracticeQuestion) -> Self {
        let correct = question.correct();
        Self {
            id: format!("{}-{}", question.theme(), question.id()),
            theme: question.theme().clone(),
            front: FlashcardFront::Image {
                image: question.image().clone(),
                caption: question.prompt().to_owned(),
            },
            back: FlashcardBack {
                answer: correct.text.clone(),
                explanation: correct.explanation.clone(),
            },
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeId {
        &self.theme
    }

    #[must_use]
    pub fn front(&self) -> &FlashcardFront {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &FlashcardBack {
        &self.back
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Text searched by keyword filters: front, answer and explanation.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let front = match &self.front {
            FlashcardFront::Text(text) => text.as_str(),
            FlashcardFront::Image { caption, .. } => caption.as_str(),
        };
        format!("{front} {} {}", self.back.answer, self.back.explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, QuestionId};

    #[test]
    fn theory_flashcard_takes_correct_alternative() {
        let question = TheoryQuestion::new(
            QuestionId::new(3),
            ThemeId::new("tecido-nervoso").unwrap(),
            "Which cell myelinates axons in the CNS?",
            "medium",
            "glia",
            vec!["glia".into()],
            vec![
                Choice::new("Schwann cell", "Myelinates peripheral axons."),
                Choice::new("Oligodendrocyte", "Myelinates several CNS axons at once."),
            ],
            1,
        )
        .unwrap();

        let card = Flashcard::from_theory(&question);
        assert_eq!(card.id(), "tecido-nervoso-3");
        assert_eq!(card.back().answer, "Oligodendrocyte");
        assert!(matches!(card.front(), FlashcardFront::Text(_)));
        assert_eq!(card.tags(), ["glia".to_owned()]);
    }

    #[test]
    fn practice_flashcard_fronts_the_image() {
        let question = PracticeQuestion::new(
            QuestionId::new(5),
            ThemeId::new("cartilagem").unwrap(),
            ImageRef::new("/images/cartilagem/lamina-05.jpg").unwrap(),
            "Identify the cartilage type.",
            vec![
                Choice::new("Hyaline cartilage", "Homogeneous matrix."),
                Choice::new("Elastic cartilage", "Elastic fiber network."),
            ],
            0,
        )
        .unwrap();

        let card = Flashcard::from_practice(&question);
        match card.front() {
            FlashcardFront::Image { image, caption } => {
                assert_eq!(image.as_str(), "/images/cartilagem/lamina-05.jpg");
                assert_eq!(caption, "Identify the cartilage type.");
            }
            FlashcardFront::Text(_) => panic!("expected image front"),
        }
        assert_eq!(card.back().answer, "Hyaline cartilage");
    }
}
