//! Per-request locale resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every inbound page path must carry a supported locale as its first
//! segment. Paths without one are redirected once to the same path under the
//! default locale; the redirect target always resolves to `Serve`, so a
//! client never sees a redirect chain.
//!
//! Infrastructure paths (API, build output, anything that looks like a file)
//! bypass resolution entirely.

use super::registry::{Locale, LocaleRegistry};

/// First segments reserved for the API and framework/build internals.
pub const EXCLUDED_PREFIXES: [&str; 5] = ["api", "_next", "_vercel", "_app", "pkg"];

/// Outcome of resolving one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Not a page path; pass through without locale handling.
    Excluded,
    /// First segment is a supported locale. `rest` is the path after it,
    /// always starting with `/`.
    Serve { locale: Locale, rest: String },
    /// No locale prefix; the caller must redirect and not render.
    Redirect { locale: Locale, to: String },
}

impl Resolution {
    #[must_use]
    pub fn effective_locale(&self) -> Option<&Locale> {
        match self {
            Self::Excluded => None,
            Self::Serve { locale, .. } | Self::Redirect { locale, .. } => Some(locale),
        }
    }

    #[must_use]
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Self::Redirect { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// True when the path must bypass locale handling.
#[must_use]
pub fn is_excluded(path: &str) -> bool {
    if path.contains('.') {
        return true;
    }
    let (first, _) = split_first_segment(path);
    EXCLUDED_PREFIXES.contains(&first)
}

/// Resolve `path` against the registry.
#[must_use]
pub fn resolve(registry: &LocaleRegistry, path: &str) -> Resolution {
    if is_excluded(path) {
        return Resolution::Excluded;
    }

    let (first, rest) = split_first_segment(path);
    if let Some(locale) = registry.get(first) {
        let rest = if rest.is_empty() { "/".to_owned() } else { rest.to_owned() };
        return Resolution::Serve { locale: locale.clone(), rest };
    }

    let locale = registry.default_locale().clone();
    let to = prefixed_path(&locale, path);
    Resolution::Redirect { locale, to }
}

/// Prepend `/<locale>` to a locale-less path. The site root maps to `/<locale>`.
#[must_use]
pub fn prefixed_path(locale: &Locale, path: &str) -> String {
    match path {
        "" | "/" => format!("/{locale}"),
        p if p.starts_with('/') => format!("/{locale}{p}"),
        p => format!("/{locale}/{p}"),
    }
}

/// Split `/a/b/c` into (`a`, `/b/c`). The remainder keeps its leading slash.
fn split_first_segment(path: &str) -> (&str, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
