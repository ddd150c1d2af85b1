//! Server configuration.
//!
//! DESIGN
//! ======
//! Everything the server reads from the environment is read here, once, into
//! an explicit struct that is handed to the components that need it. No other
//! module touches `std::env`.
//!
//! | Variable            | Default        |
//! |---------------------|----------------|
//! | `PORT`              | `3000`         |
//! | `ADMIN_USERNAME`    | unset          |
//! | `ADMIN_PASSWORD`    | unset          |
//! | `SUPPORTED_LOCALES` | `ru,en,ro,uk`  |
//! | `DEFAULT_LOCALE`    | `ru`           |
//! | `LOCALE_BUNDLE_DIR` | unset          |
//! | `COOKIE_SECURE`     | `false`        |

use std::path::PathBuf;

use crate::auth::AdminCredentials;
use crate::locale::registry::{BUILTIN_DEFAULT_LOCALE, BUILTIN_LOCALES};
use crate::locale::{LocaleError, LocaleRegistry};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("ADMIN_USERNAME must not contain `:`")]
    AdminUsernameSeparator,
    #[error("invalid locale configuration: {0}")]
    Locale(#[from] LocaleError),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub admin: AdminCredentials,
    pub locales: LocaleRegistry,
    pub bundle_dir: Option<PathBuf>,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable port, an admin username containing
    /// `:`, or an invalid locale table.
    /// Missing admin credentials are not an error here; login reports them.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` as the variable source.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let admin_username = lookup("ADMIN_USERNAME");
        // Session tokens split on the first `:`.
        if admin_username.as_deref().is_some_and(|u| u.contains(':')) {
            return Err(ConfigError::AdminUsernameSeparator);
        }
        let admin = AdminCredentials::new(admin_username, lookup("ADMIN_PASSWORD"));
        if !admin.is_configured() {
            tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set, admin login disabled");
        }

        let locales = match (lookup("SUPPORTED_LOCALES"), lookup("DEFAULT_LOCALE")) {
            (None, None) => LocaleRegistry::default(),
            (list, default) => LocaleRegistry::parse(
                list.as_deref().unwrap_or(&BUILTIN_LOCALES.join(",")),
                default.as_deref().unwrap_or(BUILTIN_DEFAULT_LOCALE),
            )?,
        };

        let bundle_dir = lookup("LOCALE_BUNDLE_DIR").filter(|s| !s.trim().is_empty()).map(PathBuf::from);
        let cookie_secure = lookup("COOKIE_SECURE").and_then(|v| parse_bool(&v)).unwrap_or(false);

        Ok(Self { port, admin, locales, bundle_dir, cookie_secure })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            admin: AdminCredentials::default(),
            locales: LocaleRegistry::default(),
            bundle_dir: None,
            cookie_secure: false,
        }
    }
}

/// Parse the `1/true/yes/on` vocabulary. Anything else is `None`.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
