use std::collections::BTreeSet;
use std::sync::Arc;

use content::ContentSource;
use histo_core::model::{GlossaryTerm, PracticeQuestion, Theme, ThemeId, TheoryQuestion};

/// A theme with its question counts, as shown on listing screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSummary {
    pub theme: Theme,
    pub theory_count: usize,
    pub practice_count: usize,
}

/// Read-side facade over the content catalog: theme listings, keyword
/// filtering and the glossary index.
///
/// Filters match when *any* whitespace-separated keyword appears in one of
/// the searched fields, case-insensitively; an empty query matches
/// everything.
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn ContentSource>,
}

impl CatalogService {
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source(&self) -> &dyn ContentSource {
        self.source.as_ref()
    }

    #[must_use]
    pub fn themes(&self) -> Vec<Theme> {
        self.source.themes().to_vec()
    }

    #[must_use]
    pub fn theme_summaries(&self) -> Vec<ThemeSummary> {
        self.source
            .themes()
            .iter()
            .map(|theme| ThemeSummary {
                theme: theme.clone(),
                theory_count: self.source.theory_questions(theme.id()).len(),
                practice_count: self.source.practice_questions(theme.id()).len(),
            })
            .collect()
    }

    /// Practice questions available across the given theme selection; the
    /// setup screen uses this as the live upper bound for the question count.
    #[must_use]
    pub fn available_practice_count(&self, themes: &BTreeSet<ThemeId>) -> usize {
        themes
            .iter()
            .map(|theme| self.source.practice_questions(theme).len())
            .sum()
    }

    /// Subtopics present in the theory questions, optionally per theme.
    #[must_use]
    pub fn subtopics(&self, theme: Option<&ThemeId>) -> Vec<String> {
        let mut subtopics: Vec<String> = self
            .theory_for(theme)
            .filter(|question| !question.subtopic().is_empty())
            .map(|question| question.subtopic().to_owned())
            .collect();
        subtopics.sort();
        subtopics.dedup();
        subtopics
    }

    #[must_use]
    pub fn filter_theory(
        &self,
        theme: Option<&ThemeId>,
        subtopic: Option<&str>,
        keywords: &str,
    ) -> Vec<TheoryQuestion> {
        self.theory_for(theme)
            .filter(|question| subtopic.is_none_or(|wanted| question.subtopic() == wanted))
            .filter(|question| {
                let mut fields = vec![question.prompt().to_owned(), question.subtopic().to_owned()];
                fields.extend(question.tags().iter().cloned());
                fields.extend(question.choices().iter().map(|c| c.text.clone()));
                keyword_match(&fields, keywords)
            })
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn filter_practice(&self, theme: Option<&ThemeId>, keywords: &str) -> Vec<PracticeQuestion> {
        let questions: Vec<&PracticeQuestion> = match theme {
            Some(theme) => self.source.practice_questions(theme).iter().collect(),
            None => self.source.all_practice_questions(),
        };
        questions
            .into_iter()
            .filter(|question| {
                let mut fields = vec![question.prompt().to_owned()];
                fields.extend(question.choices().iter().map(|c| c.text.clone()));
                keyword_match(&fields, keywords)
            })
            .cloned()
            .collect()
    }

    /// Initial letters that actually have glossary terms, sorted.
    #[must_use]
    pub fn glossary_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .source
            .glossary()
            .iter()
            .filter_map(GlossaryTerm::initial)
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    /// Glossary entries matching a free-text query and/or an initial letter.
    /// The query is matched as one substring over term, definition and
    /// category.
    #[must_use]
    pub fn filter_glossary(&self, query: &str, initial: Option<char>) -> Vec<GlossaryTerm> {
        let needle = query.trim().to_lowercase();
        self.source
            .glossary()
            .iter()
            .filter(|term| initial.is_none_or(|letter| term.initial() == Some(letter)))
            .filter(|term| {
                needle.is_empty()
                    || term.term().to_lowercase().contains(&needle)
                    || term.definition().to_lowercase().contains(&needle)
                    || term.category().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    fn theory_for<'a>(
        &'a self,
        theme: Option<&ThemeId>,
    ) -> Box<dyn Iterator<Item = &'a TheoryQuestion> + 'a> {
        match theme {
            Some(theme) => Box::new(self.source.theory_questions(theme).iter()),
            None => Box::new(self.source.all_theory_questions().into_iter()),
        }
    }
}

fn keyword_match(fields: &[String], keywords: &str) -> bool {
    let words: Vec<String> = keywords
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect();
    if words.is_empty() {
        return true;
    }
    words.iter().any(|word| {
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::InMemoryCatalog;
    use histo_core::model::{Choice, GlossaryTerm, ImageRef, QuestionId};

    fn theme(slug: &str) -> ThemeId {
        ThemeId::new(slug).unwrap()
    }

    fn catalog() -> CatalogService {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_theory(
            TheoryQuestion::new(
                QuestionId::new(1),
                theme("tecido-epitelial"),
                "Qual epitélio reveste os vasos?",
                "fácil",
                "classificação",
                vec!["endotélio".into()],
                vec![
                    Choice::new("Endotélio", "Simples pavimentoso."),
                    Choice::new("Urotélio", "Vias urinárias."),
                ],
                0,
            )
            .unwrap(),
        );
        catalog.add_theory(
            TheoryQuestion::new(
                QuestionId::new(2),
                theme("tecido-osseo"),
                "Qual célula reabsorve osso?",
                "fácil",
                "células",
                vec![],
                vec![
                    Choice::new("Osteoclasto", "Multinucleada."),
                    Choice::new("Osteoblasto", "Sintetiza matriz."),
                ],
                0,
            )
            .unwrap(),
        );
        catalog.add_practice(
            PracticeQuestion::new(
                QuestionId::new(1),
                theme("tecido-osseo"),
                ImageRef::new("/images/tecido-osseo/lamina-01.jpg").unwrap(),
                "Identifique o ósteon.",
                vec![
                    Choice::new("Sistema de Havers", "Lamelas concêntricas."),
                    Choice::new("Trabécula", "Osso esponjoso."),
                ],
                0,
            )
            .unwrap(),
        );
        catalog.add_term(GlossaryTerm::new("Ósteon", "Unidade do osso compacto.", "Tecido Ósseo").unwrap());
        catalog.add_term(GlossaryTerm::new("Endotélio", "Reveste vasos.", "Sistema Circulatório").unwrap());
        CatalogService::new(Arc::new(catalog))
    }

    #[test]
    fn theme_summaries_count_questions() {
        let service = catalog();
        let summaries = service.theme_summaries();
        let osseo = summaries
            .iter()
            .find(|summary| summary.theme.id() == &theme("tecido-osseo"))
            .unwrap();
        assert_eq!(osseo.theory_count, 1);
        assert_eq!(osseo.practice_count, 1);
    }

    #[test]
    fn keyword_filter_matches_any_word_in_any_field() {
        let service = catalog();
        // "osteoclasto" only occurs in a choice text.
        let hits = service.filter_theory(None, None, "xyz OSTEOCLASTO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), QuestionId::new(2));

        assert!(service.filter_theory(None, None, "nada-disso").is_empty());
        // Empty query matches everything.
        assert_eq!(service.filter_theory(None, None, "  ").len(), 2);
    }

    #[test]
    fn theory_filter_respects_theme_and_subtopic() {
        let service = catalog();
        let hits = service.filter_theory(Some(&theme("tecido-epitelial")), None, "");
        assert_eq!(hits.len(), 1);

        let hits = service.filter_theory(None, Some("células"), "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subtopic(), "células");
    }

    #[test]
    fn glossary_letter_index_and_filters() {
        let service = catalog();
        assert_eq!(service.glossary_letters(), vec!['E', 'Ó']);

        let hits = service.filter_glossary("", Some('E'));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term(), "Endotélio");

        let hits = service.filter_glossary("compacto", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term(), "Ósteon");
    }

    #[test]
    fn available_practice_count_sums_selected_themes() {
        let service = catalog();
        let selection: BTreeSet<ThemeId> =
            [theme("tecido-osseo"), theme("tecido-epitelial")].into();
        assert_eq!(service.available_practice_count(&selection), 1);
    }
}
