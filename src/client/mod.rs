//! Client runtime: login exchange plus the local session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! A login is one atomic exchange. The store is written only after the server
//! has returned a token, so any failure (transport, rejection, configuration)
//! leaves the store exactly as it was.

pub mod api;

use crate::auth::{Credentials, SessionToken};
use crate::session::{SessionError, SessionStore, TokenStorage};

pub use api::{LoginExchange, PageFetch, PortalClient};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("login rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("login response did not include a token")]
    MissingToken,
    #[error("session update failed: {0}")]
    Session(#[from] SessionError),
}

/// Exchange credentials for a token and store it.
///
/// # Errors
///
/// Returns the exchange or storage failure; the store is unchanged on error.
pub async fn sign_in<S, E>(
    store: &mut SessionStore<S>,
    exchange: &E,
    credentials: &Credentials,
) -> Result<SessionToken, ClientError>
where
    S: TokenStorage,
    E: LoginExchange + ?Sized,
{
    let token = exchange.exchange(credentials).await?;
    store.login(token.clone())?;
    tracing::info!(username = %credentials.username, "signed in");
    Ok(token)
}

/// Drop the local session.
///
/// # Errors
///
/// Returns a storage error if the token slot could not be cleared.
pub fn sign_out<S: TokenStorage>(store: &mut SessionStore<S>) -> Result<(), ClientError> {
    store.logout()?;
    tracing::info!("signed out");
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
