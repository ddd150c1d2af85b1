//! Administrator credential check.
//!
//! DESIGN
//! ======
//! The configured pair is injected once at construction. A half-configured
//! pair is a configuration error, reported separately from a mismatch so the
//! login route can answer 500 rather than 401.
//!
//! TRADE-OFFS
//! ==========
//! Comparison is plain exact equality with no rate limiting or lockout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Username/password submitted by a caller. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The single administrator pair read from configuration. Either half may be
/// absent; empty strings are treated as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdminCredentials {
    username: Option<String>,
    password: Option<String>,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username: username.filter(|s| !s.is_empty()), password: password.filter(|s| !s.is_empty()) }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("administrator credentials are not configured")]
    NotConfigured,
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Decides whether submitted credentials are the configured administrator.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    admin: AdminCredentials,
}

impl CredentialValidator {
    #[must_use]
    pub fn new(admin: AdminCredentials) -> Self {
        Self { admin }
    }

    /// `Ok(true)` on an exact match of both fields, `Ok(false)` on mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotConfigured`] if either configured value is
    /// missing, without looking at `submitted`.
    pub fn matches(&self, submitted: &Credentials) -> Result<bool, AuthError> {
        let (Some(username), Some(password)) = (&self.admin.username, &self.admin.password) else {
            return Err(AuthError::NotConfigured);
        };
        let user_ok = submitted.username == *username;
        let pass_ok = submitted.password == *password;
        Ok(user_ok & pass_ok)
    }

    /// Like [`Self::matches`] but folds a mismatch into [`AuthError::InvalidCredentials`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotConfigured`] or [`AuthError::InvalidCredentials`].
    pub fn validate(&self, submitted: &Credentials) -> Result<(), AuthError> {
        if self.matches(submitted)? { Ok(()) } else { Err(AuthError::InvalidCredentials) }
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
