//! Localized page routes and message bundles.
//!
//! Pages are dispatched from the locale-stripped path the middleware leaves
//! in the request extensions. Markup is not produced here; handlers answer
//! with a `PageView` for the renderer.

use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use super::auth::has_session_cookie;
use super::locale::ResolvedLocale;
use crate::guard::{AccessGuard, GateDecision};
use crate::state::AppState;
use crate::wire::PageView;

/// Page classes known to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Admin,
    Profile,
    Content,
}

impl Page {
    /// Classify a locale-stripped path such as `/admin/users`.
    #[must_use]
    pub fn classify(rest: &str) -> Self {
        let first = rest.trim_matches('/').split('/').next().unwrap_or_default();
        match first {
            "" => Self::Home,
            "login" => Self::Login,
            "admin" => Self::Admin,
            "profile" => Self::Profile,
            _ => Self::Content,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Admin => "admin",
            Self::Profile => "profile",
            Self::Content => "content",
        }
    }

    /// Gate for this page class, if it is protected.
    #[must_use]
    pub fn guard(self) -> Option<AccessGuard> {
        match self {
            Self::Admin => Some(AccessGuard::ADMIN),
            Self::Profile => Some(AccessGuard::PROFILE),
            Self::Home | Self::Login | Self::Content => None,
        }
    }
}

/// Fallback handler: every localized path not claimed by an API route.
pub async fn render(
    State(state): State<AppState>,
    resolved: Option<Extension<ResolvedLocale>>,
    jar: CookieJar,
) -> Response {
    // Excluded paths (unknown API routes, assets) carry no locale.
    let Some(Extension(resolved)) = resolved else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let page = Page::classify(&resolved.rest);
    if let Some(guard) = page.guard() {
        match guard.check(has_session_cookie(&jar), &resolved.locale) {
            GateDecision::Render => {}
            GateDecision::Redirect(to) => {
                tracing::debug!(page = page.name(), %to, "unauthenticated, redirecting to login");
                return Redirect::temporary(&to).into_response();
            }
            GateDecision::NotFound => return StatusCode::NOT_FOUND.into_response(),
        }
    }

    let title_key = format!("page.{}.title", page.name());
    let title = state.bundles.translate(&resolved.locale, &title_key).to_owned();
    Json(PageView {
        locale: resolved.locale.to_string(),
        page: page.name().to_owned(),
        path: resolved.rest,
        title,
    })
    .into_response()
}

/// `GET /api/messages/{locale}`: the raw bundle for one supported locale.
pub async fn messages(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(locale) = state.locales.get(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let bundle = state.bundles.bundle(locale).cloned().unwrap_or_default();
    Json(bundle).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
