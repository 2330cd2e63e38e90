//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the navigation guard and the login/task pages. The session wraps an
//! injected `TokenStore` so the guard's only input is explicit: the browser
//! build hands it `localStorage`, SSR and tests hand it an in-memory map.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail outward. A missing, empty, or unreadable token means
//! `Unauthenticated`; store errors are logged and swallowed. Only the write
//! API (`login`/`logout`) returns `AuthError`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Storage key holding the authentication token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("token must not be empty")]
    EmptyToken,
    #[error("token store unavailable")]
    StoreUnavailable,
    #[error("token store error: {0}")]
    Store(String),
}

/// Durable string-keyed, string-valued map holding the token.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;
    fn remove(&self, key: &str) -> Result<(), AuthError>;
}

/// In-process token store used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single `key = value` entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let entries = self.entries.read().map_err(|e| AuthError::Store(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut entries = self.entries.write().map_err(|e| AuthError::Store(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let mut entries = self.entries.write().map_err(|e| AuthError::Store(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Two-state authentication model. Transitions happen through
/// `AuthSession::login`/`logout`; the guard only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    /// Authenticated iff a non-empty token is present.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => Self::Authenticated,
            _ => Self::Unauthenticated,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// Handle on the token store, provided to components via context.
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn TokenStore>,
}

impl AuthSession {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    pub fn from_shared(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by `localStorage` in the browser, or by an empty
    /// in-memory store when rendering on the server.
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(crate::util::storage::BrowserTokenStore)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemoryTokenStore::new())
        }
    }

    /// The stored token, if present and non-empty.
    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("token store read failed, treating as unauthenticated: {e}");
                None
            }
        }
    }

    /// Current state, read from the store on every call.
    pub fn state(&self) -> AuthState {
        AuthState::from_token(self.token().as_deref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// Persist `token` as the session token.
    ///
    /// # Errors
    ///
    /// `EmptyToken` if `token` is blank; store errors are passed through.
    pub fn login(&self, token: &str) -> Result<(), AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken);
        }
        self.store.set(TOKEN_KEY, token)?;
        log::info!("session token stored");
        Ok(())
    }

    /// Remove the session token.
    ///
    /// # Errors
    ///
    /// Store errors are passed through.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(TOKEN_KEY)?;
        log::info!("session token cleared");
        Ok(())
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession").field("state", &self.state()).finish()
    }
}
