//! Persisted session storage adapters.
//!
//! The auth store owns the in-memory session; these adapters are the durable
//! mirror it writes through to on every mutation. `BrowserStorage` is backed
//! by `window.localStorage`, scoped to the origin and surviving reloads; the
//! native build reads nothing and writes nowhere. `MemoryStorage` backs unit
//! tests, where dropping the auth state while keeping the storage simulates
//! a page reload.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Key under which the session token is persisted.
pub const TOKEN_KEY: &str = "edcourse_token";

/// Key under which the serialized user record is persisted.
pub const USER_KEY: &str = "edcourse_user";

/// Durable key-value storage for session state.
///
/// Writes are best-effort: a full or unavailable backing store must not
/// surface as an application error, only as a session that fails to
/// survive the next reload.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. Requires a browser environment; on the
/// server it behaves like an always-empty store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("failed to persist {key} to localStorage");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// In-memory storage used by unit tests to simulate persistence across a
/// process restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
