//! Translated message bundles.
//!
//! Bundles are opaque key/value maps, one per supported locale, read from
//! `<dir>/<locale>.json` at startup. Lookups fall back to the default locale
//! and finally to the key itself so a missing translation never breaks a page.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use super::registry::{Locale, LocaleRegistry};

pub type Bundle = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("failed to read bundle {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("bundle {path} is not a flat JSON string map: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Clone, Default)]
pub struct MessageBundles {
    bundles: HashMap<Locale, Bundle>,
    default_locale: Option<Locale>,
}

impl MessageBundles {
    /// Empty bundles for every locale; lookups return the key.
    #[must_use]
    pub fn empty(registry: &LocaleRegistry) -> Self {
        Self { bundles: HashMap::new(), default_locale: Some(registry.default_locale().clone()) }
    }

    /// Load `<dir>/<locale>.json` for each supported locale. Missing files
    /// leave that locale empty; unreadable or malformed files are errors.
    pub fn load(dir: &Path, registry: &LocaleRegistry) -> Result<Self, BundleError> {
        let mut bundles = HashMap::new();
        for locale in registry.supported_locales() {
            let path = dir.join(format!("{locale}.json"));
            let raw = match std::fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "no message bundle for locale");
                    continue;
                }
                Err(source) => return Err(BundleError::Read { path, source }),
            };
            let bundle: Bundle = serde_json::from_str(&raw).map_err(|source| BundleError::Parse { path, source })?;
            tracing::info!(%locale, keys = bundle.len(), "loaded message bundle");
            bundles.insert(locale.clone(), bundle);
        }
        Ok(Self { bundles, default_locale: Some(registry.default_locale().clone()) })
    }

    /// Insert or replace one locale's bundle.
    pub fn insert(&mut self, locale: Locale, bundle: Bundle) {
        self.bundles.insert(locale, bundle);
    }

    #[must_use]
    pub fn bundle(&self, locale: &Locale) -> Option<&Bundle> {
        self.bundles.get(locale)
    }

    /// Translate `key` for `locale`, falling back to the default locale, then the key.
    #[must_use]
    pub fn translate<'a>(&'a self, locale: &Locale, key: &'a str) -> &'a str {
        if let Some(text) = self.bundles.get(locale).and_then(|b| b.get(key)) {
            return text;
        }
        self.default_locale
            .as_ref()
            .and_then(|d| self.bundles.get(d))
            .and_then(|b| b.get(key))
            .map_or(key, String::as_str)
    }
}

#[cfg(test)]
#[path = "bundle_test.rs"]
mod tests;
