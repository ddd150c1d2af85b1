//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! API routes live under `/api` (excluded from locale handling). Everything
//! else falls through to the page handler. The locale middleware wraps the
//! whole router, so a locale-less page path is redirected before any
//! handler runs.

pub mod auth;
pub mod locale;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/messages/{locale}", get(pages::messages))
        .route("/api/healthz", get(healthz))
        .layer(cors)
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    api_routes()
        .fallback(pages::render)
        .layer(middleware::from_fn_with_state(state.clone(), locale::resolve_locale))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
