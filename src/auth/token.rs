//! Session token encoding.
//!
//! Format: standard base64 of `username:password`.
//!
//! TRADE-OFFS
//! ==========
//! The token is unsigned and never expires. Anyone who knows the scheme and
//! the credentials can mint one; possession alone is the session signal.

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use super::credentials::Credentials;

const SEPARATOR: char = ':';

/// Opaque session token handed to the client after a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw string received from storage or the wire.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(<{} bytes>)", self.0.len())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("token payload has no `:` separator")]
    MissingSeparator,
}

/// Deterministic, reversible encoding of `credentials`.
///
/// Round-trips for any username without `:`; the password may contain it.
#[must_use]
pub fn issue(credentials: &Credentials) -> SessionToken {
    let payload = format!("{}{SEPARATOR}{}", credentials.username, credentials.password);
    SessionToken(BASE64.encode(payload.as_bytes()))
}

/// Inverse of [`issue`].
///
/// # Errors
///
/// Returns a [`DecodeError`] when `token` is not base64, not UTF-8, or has no separator.
pub fn attempt_decode(token: &str) -> Result<Credentials, DecodeError> {
    let bytes = BASE64.decode(token.trim())?;
    let payload = String::from_utf8(bytes)?;
    let (username, password) = payload.split_once(SEPARATOR).ok_or(DecodeError::MissingSeparator)?;
    Ok(Credentials::new(username, password))
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
