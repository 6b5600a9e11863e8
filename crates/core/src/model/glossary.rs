use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GlossaryError {
    #[error("glossary term cannot be empty")]
    EmptyTerm,

    #[error("definition cannot be empty for term {0:?}")]
    EmptyDefinition(String),
}

/// One glossary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryTerm {
    term: String,
    definition: String,
    category: String,
}

impl GlossaryTerm {
    /// # Errors
    ///
    /// Returns `GlossaryError` when the term or definition is blank.
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, GlossaryError> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(GlossaryError::EmptyTerm);
        }
        let definition = definition.into();
        if definition.trim().is_empty() {
            return Err(GlossaryError::EmptyDefinition(term));
        }
        Ok(Self {
            term,
            definition,
            category: category.into(),
        })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Uppercased first letter, used by the alphabetical index.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.term.chars().next().and_then(|c| c.to_uppercase().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_uppercased() {
        let term = GlossaryTerm::new("epitélio", "Tecido de revestimento.", "Tecidos").unwrap();
        assert_eq!(term.initial(), Some('E'));
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            GlossaryTerm::new(" ", "def", "cat"),
            Err(GlossaryError::EmptyTerm)
        );
        assert!(matches!(
            GlossaryTerm::new("Osso", "  ", "cat"),
            Err(GlossaryError::EmptyDefinition(_))
        ));
    }
}
