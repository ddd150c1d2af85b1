//! HTTP client for the portal server.

use async_trait::async_trait;
use reqwest::header::{COOKIE, HeaderValue, LOCATION};
use reqwest::redirect::Policy;

use super::ClientError;
use crate::auth::{Credentials, SessionToken};
use crate::routes::auth::SESSION_COOKIE;
use crate::wire::LoginResponse;

/// One login round trip: credentials in, token out, or a failure.
#[async_trait]
pub trait LoginExchange: Send + Sync {
    async fn exchange(&self, credentials: &Credentials) -> Result<SessionToken, ClientError>;
}

/// Result of fetching a page without following redirects.
#[derive(Debug, Clone)]
pub struct PageFetch {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http: reqwest::Client,
}

impl PortalClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not http(s) or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url));
        }
        // Redirects are reported to the caller, not followed.
        let http = reqwest::Client::builder().redirect(Policy::none()).build()?;
        Ok(Self { base_url, http })
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// `POST /api/login` returning the HTTP status and decoded body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a body that is not a `LoginResponse`.
    pub async fn login(&self, credentials: &Credentials) -> Result<(u16, LoginResponse), ClientError> {
        let response = self.http.post(self.url("/api/login")).json(credentials).send().await?;
        let status = response.status().as_u16();
        let body = response.json::<LoginResponse>().await?;
        Ok((status, body))
    }

    /// `POST /api/logout`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.http.post(self.url("/api/logout")).send().await?;
        Ok(())
    }

    /// `GET path`, presenting `token` as the session cookie when given.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unusable token.
    pub async fn fetch_page(&self, path: &str, token: Option<&SessionToken>) -> Result<PageFetch, ClientError> {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = token {
            let cookie = HeaderValue::from_str(&format!("{SESSION_COOKIE}={}", token.as_str()))?;
            request = request.header(COOKIE, cookie);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;
        Ok(PageFetch { status, location, body })
    }

    /// `GET /api/healthz`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn ping(&self) -> Result<bool, ClientError> {
        let response = self.http.get(self.url("/api/healthz")).send().await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl LoginExchange for PortalClient {
    async fn exchange(&self, credentials: &Credentials) -> Result<SessionToken, ClientError> {
        let (status, body) = self.login(credentials).await?;
        token_from_response(status, body)
    }
}

/// Accept only a successful response carrying a non-empty token.
pub(crate) fn token_from_response(status: u16, body: LoginResponse) -> Result<SessionToken, ClientError> {
    if !body.success {
        return Err(ClientError::Rejected { status, message: body.message });
    }
    match body.token {
        Some(token) if !token.is_empty() => Ok(SessionToken::from_raw(token)),
        _ => Err(ClientError::MissingToken),
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
