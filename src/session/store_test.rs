use super::*;
use crate::session::storage::{FileStorage, MemoryStorage};

fn token(raw: &str) -> SessionToken {
    SessionToken::from_raw(raw)
}

/// Storage whose writes always fail; reads see nothing.
struct ReadOnlyStorage;

impl TokenStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Poisoned)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Poisoned)
    }
}

/// Storage whose reads always fail.
struct BrokenStorage;

impl TokenStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Poisoned)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

// =============================================================================
// startup
// =============================================================================

#[test]
fn empty_storage_starts_anonymous() {
    let store = SessionStore::open(MemoryStorage::new());
    assert!(!store.is_authenticated());
    assert_eq!(store.state(), SessionState { is_authenticated: false, raw_token: String::new() });
}

#[test]
fn persisted_token_starts_authenticated() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    let store = SessionStore::open(storage);
    assert!(store.is_authenticated());
    assert_eq!(store.state().raw_token, "abc");
}

#[test]
fn persisted_empty_token_starts_anonymous() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "").unwrap();
    assert!(!SessionStore::open(storage).is_authenticated());
}

#[test]
fn unreadable_storage_starts_anonymous() {
    assert!(!SessionStore::open(BrokenStorage).is_authenticated());
}

// =============================================================================
// login / logout
// =============================================================================

#[test]
fn login_then_logout() {
    let mut store = SessionStore::open(MemoryStorage::new());
    store.login(token("abc")).unwrap();
    assert!(store.is_authenticated());
    assert_eq!(store.storage().get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

    store.logout().unwrap();
    assert!(!store.is_authenticated());
    assert_eq!(store.storage().get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn login_is_idempotent() {
    let mut store = SessionStore::open(MemoryStorage::new());
    store.login(token("abc")).unwrap();
    store.login(token("abc")).unwrap();
    assert_eq!(store.state(), SessionState { is_authenticated: true, raw_token: "abc".to_owned() });
}

#[test]
fn last_login_wins() {
    let mut store = SessionStore::open(MemoryStorage::new());
    store.login(token("first")).unwrap();
    store.login(token("second")).unwrap();
    assert_eq!(store.token().map(SessionToken::as_str), Some("second"));
}

#[test]
fn logout_when_anonymous_is_noop() {
    let mut store = SessionStore::open(MemoryStorage::new());
    assert!(store.logout().is_ok());
    assert!(!store.is_authenticated());
}

#[test]
fn empty_token_login_is_rejected_without_state_change() {
    let mut store = SessionStore::open(MemoryStorage::new());
    assert!(matches!(store.login(token("")), Err(SessionError::EmptyToken)));
    assert!(!store.is_authenticated());
}

#[test]
fn failed_write_leaves_store_anonymous() {
    let mut store = SessionStore::open(ReadOnlyStorage);
    assert!(matches!(store.login(token("abc")), Err(SessionError::Storage(_))));
    assert!(!store.is_authenticated());
}

#[test]
fn failed_clear_still_drops_in_memory_session() {
    let mut failing = SessionStore { storage: ReadOnlyStorage, token: Some(token("abc")) };
    assert!(failing.logout().is_err());
    assert!(!failing.is_authenticated());
}

// =============================================================================
// cross-instance visibility
// =============================================================================

#[test]
fn reload_observes_other_instance_logout() {
    let shared = MemoryStorage::new();
    let mut tab_a = SessionStore::open(shared.clone());
    let mut tab_b = SessionStore::open(shared);

    tab_a.login(token("abc")).unwrap();
    assert!(!tab_b.is_authenticated(), "tab b has not reloaded yet");
    assert!(tab_b.reload().is_authenticated);

    tab_b.logout().unwrap();
    assert!(tab_a.is_authenticated(), "tab a still holds its cached state");
    assert!(!tab_a.reload().is_authenticated);
}

#[test]
fn session_survives_restart_via_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut first = SessionStore::open(FileStorage::new(&path));
    first.login(token("abc")).unwrap();
    drop(first);

    let mut second = SessionStore::open(FileStorage::new(&path));
    assert!(second.is_authenticated());
    second.logout().unwrap();

    assert!(!SessionStore::open(FileStorage::new(&path)).is_authenticated());
}

// =============================================================================
// theme preference
// =============================================================================

#[test]
fn theme_shares_medium_but_not_session() {
    let mut store = SessionStore::open(MemoryStorage::new());
    store.set_theme("dark").unwrap();
    assert!(!store.is_authenticated());
    store.login(token("abc")).unwrap();
    store.logout().unwrap();
    assert_eq!(store.theme().as_deref(), Some("dark"));
}
