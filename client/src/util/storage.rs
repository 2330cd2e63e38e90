//! Browser `localStorage` binding for the token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps hydrate-only web-sys glue out of `state::auth`. The store handle is
//! looked up on every call, so the type stays a zero-sized `Send + Sync`
//! marker that can live in Leptos context.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::auth::{AuthError, TokenStore};

/// Token store backed by the origin-scoped `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, AuthError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(AuthError::StoreUnavailable)
}

impl TokenStore for BrowserTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| AuthError::Store(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(AuthError::StoreUnavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| AuthError::Store(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(AuthError::StoreUnavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| AuthError::Store(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(AuthError::StoreUnavailable)
        }
    }
}
