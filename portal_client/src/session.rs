//! Locally persisted session artifacts.
//!
//! The token and user identifiers written by the login flow live in a
//! key/value store (the browser's `localStorage` on wasm). [`Session`] is the
//! only way the rest of the crate reads or clears them.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USER_KEY: &str = "user";
pub const SESSION_KEY: &str = "sessionKey";

/// Every key removed when the backend reports an expired session.
pub const SESSION_ARTIFACTS: [&str; 4] = [TOKEN_KEY, USER_ID_KEY, USER_KEY, SESSION_KEY];

/// Key/value backing of a [`Session`]. Write failures are reported as a
/// description and logged by the session.
pub trait SessionStore: Debug + Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Process-local store, used by native binaries and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self.entries.write().map_err(|e| e.to_string())?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let mut entries = self.entries.write().map_err(|e| e.to_string())?;
        entries.remove(key);
        Ok(())
    }
}

/// Browser `localStorage`. Missing window or storage reads like an empty
/// store and fails writes.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        Self::storage()
            .ok_or_else(|| "localStorage unavailable".to_owned())?
            .set_item(key, value)
            .map_err(|e| format!("{e:?}"))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        Self::storage()
            .ok_or_else(|| "localStorage unavailable".to_owned())?
            .remove_item(key)
            .map_err(|e| format!("{e:?}"))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Session {
            store: Arc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Session::new(MemoryStore::default())
    }

    /// `localStorage` in the browser, process memory elsewhere.
    pub fn persistent() -> Self {
        #[cfg(target_arch = "wasm32")]
        return Session::new(LocalStorage);
        #[cfg(not(target_arch = "wasm32"))]
        return Session::in_memory();
    }

    /// Bearer token, if one is stored and non-empty.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.set(TOKEN_KEY, token);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    pub fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, "Could not store session value: {e}");
        }
    }

    /// Removes all session artifacts. Clearing an empty session is a no-op.
    /// Returns `false` if any artifact could not be removed; the remaining
    /// ones are still attempted.
    pub fn clear(&self) -> bool {
        debug!("Clearing local session artifacts");
        let mut cleared = true;
        for key in SESSION_ARTIFACTS {
            if let Err(e) = self.store.remove(key) {
                warn!(key, "Could not remove session artifact: {e}");
                cleared = false;
            }
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_removes_every_artifact() {
        let session = Session::in_memory();
        session.set_token("abc");
        session.set(USER_ID_KEY, "42");
        session.set(USER_KEY, r#"{"id":42}"#);
        session.set(SESSION_KEY, "s-1");
        session.set("theme", "dark");

        assert!(session.clear());

        for key in SESSION_ARTIFACTS {
            assert_eq!(session.get(key), None, "{key} should be cleared");
        }
        assert_eq!(session.get("theme").as_deref(), Some("dark"));

        // idempotent
        session.clear();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let session = Session::in_memory();
        session.set_token("  ");
        assert_eq!(session.token(), None);
        session.set_token("jwt");
        assert_eq!(session.token().as_deref(), Some("jwt"));
    }

    /// Store whose removals of one key always fail.
    #[derive(Debug, Default)]
    struct StuckKeyStore {
        inner: MemoryStore,
    }

    impl SessionStore for StuckKeyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            if key == TOKEN_KEY {
                return Err("QuotaExceededError".to_owned());
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_removal_is_reported_and_rest_cleared() {
        let session = Session::new(StuckKeyStore::default());
        session.set_token("abc");
        session.set(USER_ID_KEY, "42");
        session.set(SESSION_KEY, "s-1");

        assert!(!session.clear());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.get(USER_ID_KEY), None);
        assert_eq!(session.get(SESSION_KEY), None);
    }
}
