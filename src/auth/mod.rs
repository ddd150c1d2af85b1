//! Administrator login: credential check and session token codec.
//!
//! ARCHITECTURE
//! ============
//! Both halves are pure. The login route composes them: validate first, then
//! issue a token only on an exact match.

pub mod credentials;
pub mod token;

pub use credentials::{AdminCredentials, AuthError, CredentialValidator, Credentials};
pub use token::{DecodeError, SessionToken};
