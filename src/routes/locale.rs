//! Locale middleware.
//!
//! Runs in front of every route. Locale-less page paths are answered with a
//! `307` to the default-locale path (query preserved) and never reach a
//! handler. Localized paths continue with a [`ResolvedLocale`] extension;
//! excluded paths continue untouched.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::locale::{Locale, Resolution, resolve};
use crate::state::AppState;

/// Locale and locale-stripped path of a localized request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub locale: Locale,
    /// Path after the locale segment, always starting with `/`.
    pub rest: String,
}

pub async fn resolve_locale(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    match resolve(&state.locales, &path) {
        Resolution::Excluded => next.run(req).await,
        Resolution::Serve { locale, rest } => {
            req.extensions_mut().insert(ResolvedLocale { locale, rest });
            next.run(req).await
        }
        Resolution::Redirect { to, .. } => {
            let target = with_query(to, req.uri().query());
            tracing::debug!(from = %path, to = %target, "locale redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}

fn with_query(path: String, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{path}?{q}"),
        _ => path,
    }
}

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;
