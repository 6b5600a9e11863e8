//! The shipped catalog: one `theory.json` + `practice.json` pair per theme
//! and a global glossary, embedded at compile time.

use std::collections::HashMap;

use log::{info, warn};

use histo_core::model::{
    GlossaryTerm, PracticeQuestion, Theme, ThemeId, TheoryQuestion,
};

use crate::docs::{parse_glossary, parse_practice, parse_theory};
use crate::source::ContentSource;

struct ThemeDocs {
    slug: &'static str,
    theory: &'static str,
    practice: &'static str,
}

macro_rules! theme_docs {
    ($slug:literal) => {
        ThemeDocs {
            slug: $slug,
            theory: include_str!(concat!("../assets/themes/", $slug, "/theory.json")),
            practice: include_str!(concat!("../assets/themes/", $slug, "/practice.json")),
        }
    };
}

const THEME_DOCS: [ThemeDocs; 7] = [
    theme_docs!("tecido-epitelial"),
    theme_docs!("tecido-conjuntivo"),
    theme_docs!("tecido-muscular"),
    theme_docs!("tecido-nervoso"),
    theme_docs!("tecido-osseo"),
    theme_docs!("sistema-circulatorio"),
    theme_docs!("cartilagem"),
];

const GLOSSARY_DOC: &str = include_str!("../assets/glossary.json");

/// Catalog backed by the bundled documents.
///
/// Loading never fails outright: a theme whose documents do not parse or
/// validate contributes nothing and is logged, the rest of the catalog stays
/// available. An emptied practice pool surfaces later as a build-time
/// validation error on the exam screen.
pub struct BundledCatalog {
    themes: Vec<Theme>,
    theory: HashMap<ThemeId, Vec<TheoryQuestion>>,
    practice: HashMap<ThemeId, Vec<PracticeQuestion>>,
    glossary: Vec<GlossaryTerm>,
}

impl BundledCatalog {
    #[must_use]
    pub fn load() -> Self {
        let mut themes = Vec::new();
        let mut theory = HashMap::new();
        let mut practice = HashMap::new();

        for docs in &THEME_DOCS {
            let Ok(theme) = Theme::from_slug(docs.slug) else {
                warn!("skipping theme with invalid slug {:?}", docs.slug);
                continue;
            };
            let id = theme.id().clone();

            let theory_questions = match parse_theory(docs.theory, &id) {
                Ok(questions) => questions,
                Err(err) => {
                    warn!("skipping theory questions for {id}: {err}");
                    Vec::new()
                }
            };
            let practice_questions = match parse_practice(docs.practice, &id) {
                Ok(questions) => questions,
                Err(err) => {
                    warn!("skipping practice questions for {id}: {err}");
                    Vec::new()
                }
            };

            if theory_questions.is_empty() && practice_questions.is_empty() {
                continue;
            }

            theory.insert(id.clone(), theory_questions);
            practice.insert(id, practice_questions);
            themes.push(theme);
        }

        let glossary = match parse_glossary(GLOSSARY_DOC) {
            Ok(terms) => terms,
            Err(err) => {
                warn!("skipping glossary: {err}");
                Vec::new()
            }
        };

        let catalog = Self {
            themes,
            theory,
            practice,
            glossary,
        };
        info!(
            "catalog loaded: {} themes, {} theory questions, {} practice questions, {} glossary terms",
            catalog.themes.len(),
            catalog.all_theory_questions().len(),
            catalog.all_practice_questions().len(),
            catalog.glossary.len(),
        );
        catalog
    }
}

impl ContentSource for BundledCatalog {
    fn themes(&self) -> &[Theme] {
        &self.themes
    }

    fn theory_questions(&self, theme: &ThemeId) -> &[TheoryQuestion] {
        self.theory.get(theme).map_or(&[], Vec::as_slice)
    }

    fn practice_questions(&self, theme: &ThemeId) -> &[PracticeQuestion] {
        self.practice.get(theme).map_or(&[], Vec::as_slice)
    }

    fn glossary(&self) -> &[GlossaryTerm] {
        &self.glossary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_documents_all_parse() {
        let catalog = BundledCatalog::load();
        // Every shipped theme must survive validation.
        assert_eq!(catalog.themes().len(), THEME_DOCS.len());
        assert!(!catalog.glossary().is_empty());

        for theme in catalog.themes() {
            let practice = catalog.practice_questions(theme.id());
            assert!(
                !practice.is_empty(),
                "theme {} shipped without practice questions",
                theme.id()
            );
            for question in practice {
                assert!(question.correct_choice() < question.choices().len());
            }
        }
    }

    #[test]
    fn practice_ids_are_unique_within_their_theme() {
        let catalog = BundledCatalog::load();
        for theme in catalog.themes() {
            let mut seen = std::collections::HashSet::new();
            for question in catalog.practice_questions(theme.id()) {
                assert!(
                    seen.insert(question.id()),
                    "duplicate id {} in theme {}",
                    question.id(),
                    theme.id()
                );
            }
        }
    }
}
