use std::sync::Arc;

use content::ContentSource;
use histo_core::model::{Flashcard, ThemeId};

/// Which derived deck to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckKind {
    /// Text-fronted cards from the theory questions.
    Theory,
    /// Image-fronted cards from the practice questions.
    Practice,
}

/// Derives flashcard decks from the question catalog.
#[derive(Clone)]
pub struct FlashcardService {
    source: Arc<dyn ContentSource>,
}

impl FlashcardService {
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// The full deck of the given kind, in catalog order.
    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> Vec<Flashcard> {
        match kind {
            DeckKind::Theory => self
                .source
                .all_theory_questions()
                .into_iter()
                .map(Flashcard::from_theory)
                .collect(),
            DeckKind::Practice => self
                .source
                .all_practice_questions()
                .into_iter()
                .map(Flashcard::from_practice)
                .collect(),
        }
    }

    /// The deck narrowed by theme and any-word keyword match.
    #[must_use]
    pub fn filtered_deck(
        &self,
        kind: DeckKind,
        theme: Option<&ThemeId>,
        keywords: &str,
    ) -> Vec<Flashcard> {
        let words: Vec<String> = keywords
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        self.deck(kind)
            .into_iter()
            .filter(|card| theme.is_none_or(|wanted| card.theme() == wanted))
            .filter(|card| {
                if words.is_empty() {
                    return true;
                }
                let haystack = card.searchable_text().to_lowercase();
                let tags = card.tags().join(" ").to_lowercase();
                words
                    .iter()
                    .any(|word| haystack.contains(word) || tags.contains(word))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::InMemoryCatalog;
    use histo_core::model::{Choice, FlashcardFront, ImageRef, PracticeQuestion, QuestionId, TheoryQuestion};

    fn theme(slug: &str) -> ThemeId {
        ThemeId::new(slug).unwrap()
    }

    fn service() -> FlashcardService {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_theory(
            TheoryQuestion::new(
                QuestionId::new(1),
                theme("tecido-nervoso"),
                "Qual glia mieliniza o SNC?",
                "fácil",
                "neuróglia",
                vec!["mielina".into()],
                vec![
                    Choice::new("Oligodendrócito", "Mieliniza vários axônios."),
                    Choice::new("Astrócito", "Suporte metabólico."),
                ],
                0,
            )
            .unwrap(),
        );
        catalog.add_practice(
            PracticeQuestion::new(
                QuestionId::new(1),
                theme("cartilagem"),
                ImageRef::new("/images/cartilagem/lamina-01.jpg").unwrap(),
                "Classifique a cartilagem.",
                vec![
                    Choice::new("Hialina", "Matriz homogênea."),
                    Choice::new("Elástica", "Rede de elastina."),
                ],
                0,
            )
            .unwrap(),
        );
        FlashcardService::new(Arc::new(catalog))
    }

    #[test]
    fn theory_deck_fronts_prompts() {
        let deck = service().deck(DeckKind::Theory);
        assert_eq!(deck.len(), 1);
        assert!(matches!(deck[0].front(), FlashcardFront::Text(_)));
        assert_eq!(deck[0].back().answer, "Oligodendrócito");
    }

    #[test]
    fn practice_deck_fronts_images() {
        let deck = service().deck(DeckKind::Practice);
        assert_eq!(deck.len(), 1);
        assert!(matches!(deck[0].front(), FlashcardFront::Image { .. }));
    }

    #[test]
    fn filter_narrows_by_theme_and_keyword() {
        let service = service();
        assert_eq!(
            service
                .filtered_deck(DeckKind::Theory, Some(&theme("cartilagem")), "")
                .len(),
            0
        );
        // Keyword hits the tag.
        assert_eq!(
            service.filtered_deck(DeckKind::Theory, None, "mielina").len(),
            1
        );
        assert_eq!(
            service.filtered_deck(DeckKind::Theory, None, "inexistente").len(),
            0
        );
    }
}
