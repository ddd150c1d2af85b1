//! Auth routes: administrator login and logout.
//!
//! Every failure is converted to the structured `LoginResponse` here; nothing
//! propagates past the handler. Internal detail is logged, not returned.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::auth::{AuthError, Credentials, token};
use crate::state::AppState;
use crate::wire::LoginResponse;

/// Cookie the server-side gates read as the session marker.
pub const SESSION_COOKIE: &str = "auth-token";

const MSG_INVALID: &str = "Invalid credentials";
const MSG_NOT_CONFIGURED: &str = "Server configuration error";
const MSG_FAILED: &str = "Login failed";

#[derive(Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
    }
}

fn auth_error_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::NotConfigured => MSG_NOT_CONFIGURED,
        AuthError::InvalidCredentials => MSG_INVALID,
    }
}

/// Session marker present and non-empty.
#[must_use]
pub fn has_session_cookie(jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE).is_some_and(|c| !c.value().is_empty())
}

fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/login`: checks admin credentials, then issues the token and sets the cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, body: Bytes) -> Response {
    let request: LoginRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "malformed login body");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(LoginResponse::failed(MSG_FAILED))).into_response();
        }
    };
    let credentials = Credentials::new(request.username, request.password);

    if let Err(e) = state.validator.validate(&credentials) {
        match e {
            AuthError::NotConfigured => tracing::error!("login attempted but admin credentials are not configured"),
            AuthError::InvalidCredentials => tracing::warn!(username = %credentials.username, "login rejected"),
        }
        return (auth_error_to_status(&e), Json(LoginResponse::failed(auth_error_message(&e)))).into_response();
    }

    let token = token::issue(&credentials).into_string();
    tracing::info!(username = %credentials.username, "admin login");

    let jar = jar.add(session_cookie(token.clone(), state.cookie_secure));
    (jar, Json(LoginResponse::ok(token))).into_response()
}

/// `POST /api/logout`: clears the session cookie. Always succeeds.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let mut cookie = session_cookie(String::new(), state.cookie_secure);
    cookie.set_max_age(Duration::ZERO);
    (jar.add(cookie), StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
