use super::*;

/// Store whose every operation fails, standing in for a blocked `localStorage`.
struct BrokenStore;

impl TokenStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, AuthError> {
        Err(AuthError::Store("SecurityError".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), AuthError> {
        Err(AuthError::StoreUnavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), AuthError> {
        Err(AuthError::StoreUnavailable)
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_unauthenticated() {
    assert_eq!(AuthState::default(), AuthState::Unauthenticated);
}

#[test]
fn auth_state_from_token() {
    assert_eq!(AuthState::from_token(None), AuthState::Unauthenticated);
    assert_eq!(AuthState::from_token(Some("")), AuthState::Unauthenticated);
    assert_eq!(AuthState::from_token(Some("abc123")), AuthState::Authenticated);
}

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.get("k"), Ok(None));
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
    store.remove("k").unwrap();
    assert_eq!(store.get("k"), Ok(None));
}

#[test]
fn memory_store_remove_missing_key_is_ok() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.remove("absent"), Ok(()));
}

// =============================================================
// AuthSession reads
// =============================================================

#[test]
fn empty_store_is_unauthenticated() {
    let session = AuthSession::new(MemoryTokenStore::new());
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn empty_token_value_is_unauthenticated() {
    let session = AuthSession::new(MemoryTokenStore::with_entry(TOKEN_KEY, ""));
    assert_eq!(session.token(), None);
    assert_eq!(session.state(), AuthState::Unauthenticated);
}

#[test]
fn stored_token_is_authenticated() {
    let session = AuthSession::new(MemoryTokenStore::with_entry(TOKEN_KEY, "abc123"));
    assert_eq!(session.token().as_deref(), Some("abc123"));
    assert_eq!(session.state(), AuthState::Authenticated);
}

#[test]
fn token_under_other_key_is_ignored() {
    let session = AuthSession::new(MemoryTokenStore::with_entry("session", "abc123"));
    assert!(!session.is_authenticated());
}

#[test]
fn unreadable_store_is_unauthenticated() {
    let session = AuthSession::new(BrokenStore);
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn state_is_read_fresh_from_shared_store() {
    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let session = AuthSession::from_shared(store.clone());
    assert!(!session.is_authenticated());
    store.set(TOKEN_KEY, "abc123").unwrap();
    assert!(session.is_authenticated());
    store.remove(TOKEN_KEY).unwrap();
    assert!(!session.is_authenticated());
}

// =============================================================
// AuthSession writes
// =============================================================

#[test]
fn login_stores_token_under_token_key() {
    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let session = AuthSession::from_shared(store.clone());
    session.login("abc123").unwrap();
    assert_eq!(store.get(TOKEN_KEY), Ok(Some("abc123".to_owned())));
    assert!(session.is_authenticated());
}

#[test]
fn login_rejects_blank_token() {
    let session = AuthSession::new(MemoryTokenStore::new());
    assert_eq!(session.login(""), Err(AuthError::EmptyToken));
    assert_eq!(session.login("   "), Err(AuthError::EmptyToken));
    assert!(!session.is_authenticated());
}

#[test]
fn logout_clears_token() {
    let session = AuthSession::new(MemoryTokenStore::with_entry(TOKEN_KEY, "abc123"));
    session.logout().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn writes_surface_store_errors() {
    let session = AuthSession::new(BrokenStore);
    assert_eq!(session.login("abc123"), Err(AuthError::StoreUnavailable));
    assert_eq!(session.logout(), Err(AuthError::StoreUnavailable));
}

#[test]
fn clones_share_the_same_store() {
    let session = AuthSession::new(MemoryTokenStore::new());
    let other = session.clone();
    session.login("abc123").unwrap();
    assert!(other.is_authenticated());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn environment_session_starts_unauthenticated_off_browser() {
    assert!(!AuthSession::for_environment().is_authenticated());
}
