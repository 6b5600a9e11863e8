use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ThemeError {
    #[error("theme slug cannot be empty")]
    EmptySlug,

    #[error("theme slug must be lowercase kebab-case: {0:?}")]
    InvalidSlug(String),
}

//
// ─── THEME ID ──────────────────────────────────────────────────────────────────
//

/// Identifier for a question theme: a lowercase kebab-case slug such as
/// `tecido-epitelial`, matching the content directory names.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    /// Validates and wraps a theme slug.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` if the slug is empty or contains characters
    /// outside `[a-z0-9-]`.
    pub fn new(slug: impl Into<String>) -> Result<Self, ThemeError> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(ThemeError::EmptySlug);
        }
        let valid = slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid || slug.starts_with('-') || slug.ends_with('-') {
            return Err(ThemeError::InvalidSlug(slug));
        }
        Ok(Self(slug))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title-cases the slug words for display: `tecido-epitelial` becomes
    /// `Tecido Epitelial`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThemeId({})", self.0)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::new(s)
    }
}

//
// ─── THEME ─────────────────────────────────────────────────────────────────────
//

/// A theme together with its derived display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    id: ThemeId,
    name: String,
}

impl Theme {
    /// Builds a theme from its slug, deriving the display name.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` for an invalid slug.
    pub fn from_slug(slug: impl Into<String>) -> Result<Self, ThemeError> {
        let id = ThemeId::new(slug)?;
        let name = id.display_name();
        Ok(Self { id, name })
    }

    #[must_use]
    pub fn id(&self) -> &ThemeId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_title_cases_slug_words() {
        let id = ThemeId::new("tecido-epitelial").unwrap();
        assert_eq!(id.display_name(), "Tecido Epitelial");

        let id = ThemeId::new("cartilagem").unwrap();
        assert_eq!(id.display_name(), "Cartilagem");
    }

    #[test]
    fn rejects_empty_and_malformed_slugs() {
        assert_eq!(ThemeId::new("  "), Err(ThemeError::EmptySlug));
        assert!(matches!(
            ThemeId::new("Tecido Epitelial"),
            Err(ThemeError::InvalidSlug(_))
        ));
        assert!(matches!(ThemeId::new("-leading"), Err(ThemeError::InvalidSlug(_))));
    }

    #[test]
    fn theme_from_slug_derives_name() {
        let theme = Theme::from_slug("sistema-circulatorio").unwrap();
        assert_eq!(theme.id().as_str(), "sistema-circulatorio");
        assert_eq!(theme.name(), "Sistema Circulatorio");
    }
}
