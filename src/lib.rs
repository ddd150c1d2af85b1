//! Locale routing and administrator session gate for the portal site.
//!
//! ARCHITECTURE
//! ============
//! Server side: `routes` wires the locale middleware, the login API and the
//! gated page handler over `AppState`. Client side: `session` holds the
//! persisted token and `client` performs the login exchange. `guard` is
//! shared by both.

pub mod auth;
pub mod client;
pub mod config;
pub mod guard;
pub mod locale;
pub mod routes;
pub mod session;
pub mod state;
pub mod wire;
