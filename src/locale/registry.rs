//! Supported locale table.
//!
//! DESIGN
//! ======
//! The registry is built once at startup from configuration and never
//! mutated afterwards. Construction enforces the table invariants so every
//! consumer can rely on a non-trivial set with a default that is a member.

use std::fmt;

use serde::Serialize;

use super::resolver::EXCLUDED_PREFIXES;

/// Locales served when configuration does not override them.
pub const BUILTIN_LOCALES: [&str; 4] = ["ru", "en", "ro", "uk"];
/// Default locale when configuration does not override it.
pub const BUILTIN_DEFAULT_LOCALE: &str = "ru";

const MIN_LOCALES: usize = 2;

// =============================================================================
// LOCALE
// =============================================================================

/// A supported language identifier, e.g. `en`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("at least two locales are required, got {0}")]
    TooFew(usize),
    #[error("locale identifier must be a non-empty path-safe segment: {0:?}")]
    InvalidIdentifier(String),
    #[error("locale `{0}` listed more than once")]
    Duplicate(String),
    #[error("default locale `{0}` is not in the supported set")]
    DefaultNotSupported(String),
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Fixed set of supported locales with exactly one default.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Build a registry, validating cardinality, identifiers and the default.
    pub fn new<I, S>(locales: I, default_locale: &str) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table: Vec<Locale> = Vec::new();
        for raw in locales {
            let raw: String = raw.into();
            let id = raw.trim().to_owned();
            if !is_valid_identifier(&id) {
                return Err(LocaleError::InvalidIdentifier(id));
            }
            if table.iter().any(|l| l.0 == id) {
                return Err(LocaleError::Duplicate(id));
            }
            table.push(Locale(id));
        }

        if table.len() < MIN_LOCALES {
            return Err(LocaleError::TooFew(table.len()));
        }

        let default_locale = default_locale.trim();
        let default_index = table
            .iter()
            .position(|l| l.0 == default_locale)
            .ok_or_else(|| LocaleError::DefaultNotSupported(default_locale.to_owned()))?;

        Ok(Self { locales: table, default_index })
    }

    /// Parse a comma-separated list such as `"ru,en,ro,uk"`.
    pub fn parse(list: &str, default_locale: &str) -> Result<Self, LocaleError> {
        Self::new(list.split(',').filter(|s| !s.trim().is_empty()), default_locale)
    }

    /// Supported locales in configuration order.
    #[must_use]
    pub fn supported_locales(&self) -> &[Locale] {
        &self.locales
    }

    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default_index]
    }

    /// Exact, case-sensitive lookup of a path segment.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.0 == segment)
    }

    #[must_use]
    pub fn is_supported(&self, segment: &str) -> bool {
        self.get(segment).is_some()
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self {
            locales: BUILTIN_LOCALES.iter().map(|s| Locale((*s).to_owned())).collect(),
            default_index: 0,
        }
    }
}

/// Identifiers become URL segments: no escaping needed, and never shadowing
/// an excluded prefix.
fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty()
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && !EXCLUDED_PREFIXES.contains(&id)
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
