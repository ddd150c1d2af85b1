//! Client-held session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the client's view of whether it is logged in. The only
//! signal is a non-empty token in the `auth-token` slot of the persistence
//! medium. State transitions:
//!
//! ```text
//! Anonymous --login(token)--> Authenticated --logout()--> Anonymous
//! ```
//!
//! TRADE-OFFS
//! ==========
//! The in-memory flag is a cache of the storage slot. Other instances sharing
//! the medium may change the slot at any time; `reload` re-derives the state
//! and guards call it before deciding. There is no expiry.

use serde::Serialize;

use super::storage::{StorageError, THEME_KEY, TOKEN_KEY, TokenStorage};
use crate::auth::SessionToken;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("refusing to log in with an empty token")]
    EmptyToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Snapshot of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub raw_token: String,
}

pub struct SessionStore<S> {
    storage: S,
    token: Option<SessionToken>,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Derive the initial state from storage. An unreadable medium starts
    /// the store anonymous.
    pub fn open(storage: S) -> Self {
        let token = read_token(&storage);
        Self { storage, token }
    }

    /// Persist `token` and become authenticated.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptyToken`] for an empty token, or a storage error if
    /// the write fails. In both cases the in-memory state is unchanged.
    pub fn login(&mut self, token: SessionToken) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.storage.set(TOKEN_KEY, token.as_str())?;
        self.token = Some(token);
        tracing::debug!("session stored");
        Ok(())
    }

    /// Remove the token and become anonymous. Safe to call when already anonymous.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the slot could not be cleared. The
    /// in-memory state is anonymous either way.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.token = None;
        self.storage.remove(TOKEN_KEY)?;
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Result of the last `open`, `login`, `logout` or `reload`.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState {
            is_authenticated: self.is_authenticated(),
            raw_token: self.token.as_ref().map(|t| t.as_str().to_owned()).unwrap_or_default(),
        }
    }

    /// Re-read the slot, picking up writes made by other instances.
    pub fn reload(&mut self) -> SessionState {
        self.token = read_token(&self.storage);
        self.state()
    }

    /// Read the theme preference stored alongside the session.
    #[must_use]
    pub fn theme(&self) -> Option<String> {
        match self.storage.get(THEME_KEY) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(error = %e, "theme slot unreadable");
                None
            }
        }
    }

    /// Store the theme preference.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails.
    pub fn set_theme(&self, theme: &str) -> Result<(), SessionError> {
        self.storage.set(THEME_KEY, theme)?;
        Ok(())
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn read_token<S: TokenStorage>(storage: &S) -> Option<SessionToken> {
    match storage.get(TOKEN_KEY) {
        Ok(Some(raw)) if !raw.is_empty() => Some(SessionToken::from_raw(raw)),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "session storage unreadable, treating as anonymous");
            None
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
