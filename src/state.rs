//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and the locale middleware via
//! the `State` extractor. Everything in it is immutable after startup, so
//! clones are cheap `Arc` copies and no locking is needed per request.

use std::sync::Arc;

use crate::auth::CredentialValidator;
use crate::config::AppConfig;
use crate::locale::{LocaleRegistry, MessageBundles};

/// Shared application state. Clone is required by Axum.
#[derive(Clone)]
pub struct AppState {
    pub locales: Arc<LocaleRegistry>,
    pub validator: Arc<CredentialValidator>,
    pub bundles: Arc<MessageBundles>,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig, bundles: MessageBundles) -> Self {
        Self {
            locales: Arc::new(config.locales.clone()),
            validator: Arc::new(CredentialValidator::new(config.admin.clone())),
            bundles: Arc::new(bundles),
            cookie_secure: config.cookie_secure,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::auth::AdminCredentials;

    /// State with admin `admin`/`secret`, locales `ru,en,ro,uk` (default `ru`).
    #[must_use]
    pub fn test_app_state() -> AppState {
        let config = AppConfig {
            admin: AdminCredentials::new(Some("admin".into()), Some("secret".into())),
            ..AppConfig::default()
        };
        let bundles = MessageBundles::empty(&config.locales);
        AppState::new(&config, bundles)
    }

    /// Same as [`test_app_state`] but with no admin credentials configured.
    #[must_use]
    pub fn test_app_state_unconfigured() -> AppState {
        let config = AppConfig::default();
        let bundles = MessageBundles::empty(&config.locales);
        AppState::new(&config, bundles)
    }
}
