//! Client-side session persistence and state.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, StorageError, TokenStorage};
pub use store::{SessionError, SessionState, SessionStore};
