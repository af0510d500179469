//! Durable credential storage.
//!
//! Credentials survive page reloads in `localStorage` under two named slots:
//! the access token and an optional refresh token. Callers see absent slots
//! as `None`, never as an error. Requires a browser environment; on the
//! server every read is absent and writes are inert.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Slot holding the bearer token sent with authenticated requests.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Slot holding the refresh token, when the server issues one.
/// Stored and cleared alongside the access token but never exercised:
/// token renewal is handled by re-login, not silent refresh.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Key/value storage that outlives the process.
///
/// `set` returns `false` when the value could not be persisted (storage
/// denied or full); callers that tie in-memory state to persistence must
/// not claim the new state in that case.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

/// Browser `localStorage` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl CredentialStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return false;
            };
            storage.set_item(key, value).is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            false
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend for tests and non-browser contexts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        true
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
