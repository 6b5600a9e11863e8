use std::collections::HashMap;

use histo_core::model::{
    GlossaryTerm, PracticeQuestion, Theme, ThemeId, TheoryQuestion,
};

/// Read access to the question/glossary catalog.
///
/// The bundled catalog implements this for the shipped content; tests use
/// [`InMemoryCatalog`].
pub trait ContentSource: Send + Sync {
    /// Themes that contributed at least one question.
    fn themes(&self) -> &[Theme];

    fn theory_questions(&self, theme: &ThemeId) -> &[TheoryQuestion];

    fn practice_questions(&self, theme: &ThemeId) -> &[PracticeQuestion];

    fn glossary(&self) -> &[GlossaryTerm];

    fn all_theory_questions(&self) -> Vec<&TheoryQuestion> {
        self.themes()
            .iter()
            .flat_map(|theme| self.theory_questions(theme.id()))
            .collect()
    }

    fn all_practice_questions(&self) -> Vec<&PracticeQuestion> {
        self.themes()
            .iter()
            .flat_map(|theme| self.practice_questions(theme.id()))
            .collect()
    }
}

/// Catalog held entirely in memory. Used by tests and previews.
#[derive(Default)]
pub struct InMemoryCatalog {
    themes: Vec<Theme>,
    theory: HashMap<ThemeId, Vec<TheoryQuestion>>,
    practice: HashMap<ThemeId, Vec<PracticeQuestion>>,
    glossary: Vec<GlossaryTerm>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_theme(&mut self, theme: Theme) {
        if !self.themes.iter().any(|existing| existing.id() == theme.id()) {
            self.themes.push(theme);
        }
    }

    /// Adds a theory question, registering its theme when unseen.
    pub fn add_theory(&mut self, question: TheoryQuestion) {
        self.register_theme(question.theme());
        self.theory
            .entry(question.theme().clone())
            .or_default()
            .push(question);
    }

    /// Adds a practice question, registering its theme when unseen.
    pub fn add_practice(&mut self, question: PracticeQuestion) {
        self.register_theme(question.theme());
        self.practice
            .entry(question.theme().clone())
            .or_default()
            .push(question);
    }

    pub fn add_term(&mut self, term: GlossaryTerm) {
        self.glossary.push(term);
    }

    fn register_theme(&mut self, id: &ThemeId) {
        if !self.themes.iter().any(|theme| theme.id() == id) {
            if let Ok(theme) = Theme::from_slug(id.as_str()) {
                self.themes.push(theme);
            }
        }
    }
}

impl ContentSource for InMemoryCatalog {
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
    use histo_core::model::{Choice, ImageRef, QuestionId};

    fn practice(id: u32, slug: &str) -> PracticeQuestion {
        PracticeQuestion::new(
            QuestionId::new(id),
            ThemeId::new(slug).unwrap(),
            ImageRef::new(format!("/images/{slug}/lamina-{id:02}.jpg")).unwrap(),
            "Identifique o tecido.",
            vec![
                Choice::new("Tecido epitelial", "Células justapostas."),
                Choice::new("Tecido conjuntivo", "Matriz abundante."),
            ],
            0,
        )
        .unwrap()
    }

    #[test]
    fn adding_questions_registers_their_theme_once() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_practice(practice(1, "tecido-epitelial"));
        catalog.add_practice(practice(2, "tecido-epitelial"));

        assert_eq!(catalog.themes().len(), 1);
        let theme = ThemeId::new("tecido-epitelial").unwrap();
        assert_eq!(catalog.practice_questions(&theme).len(), 2);
        assert!(catalog.theory_questions(&theme).is_empty());
    }

    #[test]
    fn all_practice_questions_spans_themes() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_practice(practice(1, "tecido-epitelial"));
        catalog.add_practice(practice(1, "cartilagem"));

        assert_eq!(catalog.all_practice_questions().len(), 2);
    }
}
