//! Access gate for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected resource class picks one policy explicitly:
//! - `RedirectToLogin` for administrative surfaces. An anonymous caller is
//!   sent to `/<locale>/login`, which reveals that the surface exists.
//! - `RespondNotFound` for the profile surface. An anonymous caller gets the
//!   same answer as for a path that does not exist.
//!
//! The guard only sees a boolean session signal. Servers derive it from the
//! `auth-token` cookie; clients derive it from their `SessionStore`.

use crate::locale::Locale;
use crate::session::{SessionStore, TokenStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePolicy {
    RedirectToLogin,
    RespondNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect(String),
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGuard {
    policy: GatePolicy,
}

impl AccessGuard {
    /// Guard for administrative surfaces.
    pub const ADMIN: Self = Self { policy: GatePolicy::RedirectToLogin };
    /// Guard for the user profile surface.
    pub const PROFILE: Self = Self { policy: GatePolicy::RespondNotFound };

    #[must_use]
    pub const fn new(policy: GatePolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    /// Decide for a caller whose session signal is `authenticated`.
    #[must_use]
    pub fn check(&self, authenticated: bool, locale: &Locale) -> GateDecision {
        if authenticated {
            return GateDecision::Render;
        }
        match self.policy {
            GatePolicy::RedirectToLogin => GateDecision::Redirect(login_path(locale)),
            GatePolicy::RespondNotFound => GateDecision::NotFound,
        }
    }

    /// Decide from a client session, re-reading storage first.
    pub fn check_session<S: TokenStorage>(&self, store: &mut SessionStore<S>, locale: &Locale) -> GateDecision {
        let state = store.reload();
        self.check(state.is_authenticated, locale)
    }
}

/// Login surface for `locale`.
#[must_use]
pub fn login_path(locale: &Locale) -> String {
    format!("/{locale}/login")
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
