//! Browser-profile persistence for the candidate list.
//!
//! The screen mirrors every list mutation into `window.localStorage` as a
//! whole-list overwrite under a fixed key. The store is a small trait so the
//! form controller can be exercised against an in-memory fake in tests.

use gloo_console::error;

/// Fixed key under which the candidate list is persisted.
pub const CANDIDATES_KEY: &str = "candidates";

/// Synchronous key-value string storage scoped to the browser profile.
pub trait PersistenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Store backed by `window.localStorage`. When storage is unavailable
/// (detached window, private-browsing restrictions), reads yield `None` and
/// writes are dropped with a console diagnostic.
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PersistenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).unwrap_or(None)
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    error!("localStorage write failed for key", key.to_owned());
                }
            }
            None => error!("localStorage unavailable, dropping write for key", key.to_owned()),
        }
    }
}

/// In-memory stand-in for `localStorage`.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}
