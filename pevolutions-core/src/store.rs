//! Session storage: one user record slot plus a logged-in flag.
//!
//! [`KeyValueStore`] is the raw string capability a platform provides (browser
//! `localStorage`, an in-memory map in tests). [`SessionStoreAdapter`] layers
//! the record encoding and flag semantics on top of it and implements
//! [`SessionStore`], which is all the auth controller depends on.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::user::UserRecord;

/// Storage key holding the JSON-encoded [`UserRecord`].
pub const USER_KEY: &str = "user";
/// Storage key holding the literal `"true"` while a session is active.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

const FLAG_SET: &str = "true";

/// String key-value storage provided by the platform.
///
/// Implementations absorb their own failures: the portal treats local storage
/// as always available.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// The session capability the auth controller is written against.
pub trait SessionStore {
    /// Read the stored record. Unreadable data is reported as absent.
    fn get(&self) -> Option<UserRecord>;
    /// Overwrite the stored record.
    fn put(&self, record: &UserRecord);
    fn set_logged_in(&self, flag: bool);
    fn is_logged_in(&self) -> bool;
    /// Clear the session flag only. The record stays in storage.
    fn clear_session(&self);
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn get(&self) -> Option<UserRecord> {
        (**self).get()
    }

    fn put(&self, record: &UserRecord) {
        (**self).put(record);
    }

    fn set_logged_in(&self, flag: bool) {
        (**self).set_logged_in(flag);
    }

    fn is_logged_in(&self) -> bool {
        (**self).is_logged_in()
    }

    fn clear_session(&self) {
        (**self).clear_session();
    }
}

/// Key names used by [`SessionStoreAdapter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    pub user: String,
    pub logged_in: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            user: USER_KEY.to_string(),
            logged_in: LOGGED_IN_KEY.to_string(),
        }
    }
}

/// [`SessionStore`] over any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SessionStoreAdapter<K> {
    backend: K,
    keys: SessionKeys,
}

impl<K: KeyValueStore> SessionStoreAdapter<K> {
    pub fn new(backend: K) -> Self {
        Self::with_keys(backend, SessionKeys::default())
    }

    pub const fn with_keys(backend: K, keys: SessionKeys) -> Self {
        Self { backend, keys }
    }

    pub const fn backend(&self) -> &K {
        &self.backend
    }
}

impl<K: KeyValueStore> SessionStore for SessionStoreAdapter<K> {
    fn get(&self) -> Option<UserRecord> {
        let raw = self.backend.get_item(&self.keys.user)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("ignoring unreadable record under '{}': {err}", self.keys.user);
                None
            }
        }
    }

    fn put(&self, record: &UserRecord) {
        match serde_json::to_string(record) {
            Ok(json) => self.backend.set_item(&self.keys.user, &json),
            Err(err) => log::warn!("failed to encode user record: {err}"),
        }
    }

    fn set_logged_in(&self, flag: bool) {
        if flag {
            self.backend.set_item(&self.keys.logged_in, FLAG_SET);
        } else {
            self.backend.remove_item(&self.keys.logged_in);
        }
    }

    fn is_logged_in(&self) -> bool {
        self.backend
            .get_item(&self.keys.logged_in)
            .is_some_and(|v| v == FLAG_SET)
    }

    fn clear_session(&self) {
        self.set_logged_in(false);
    }
}

/// In-memory [`KeyValueStore`]. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Copy of the raw contents, for assertions.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.items.borrow().clone()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Session store backed by a fresh [`MemoryStorage`].
#[must_use]
pub fn memory_session() -> SessionStoreAdapter<MemoryStorage> {
    SessionStoreAdapter::new(MemoryStorage::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::CountryCode;

    fn record() -> UserRecord {
        UserRecord {
            username: "Dawn".into(),
            email: "dawn@example.com".into(),
            password: "piplup".into(),
            country: CountryCode::parse("ES").ok(),
        }
    }

    #[test]
    fn put_then_get_uses_user_key() {
        let store = memory_session();
        assert!(store.get().is_none());
        store.put(&record());
        assert_eq!(store.get(), Some(record()));
        let raw = store.backend().snapshot();
        assert!(raw[USER_KEY].contains("\"username\":\"Dawn\""));
    }

    #[test]
    fn malformed_record_reads_as_absent() {
        let backend = MemoryStorage::new();
        backend.set_item(USER_KEY, "{not json");
        let store = SessionStoreAdapter::new(backend);
        assert!(store.get().is_none());
    }

    #[test]
    fn flag_is_literal_true_or_absent() {
        let store = memory_session();
        assert!(!store.is_logged_in());
        store.set_logged_in(true);
        assert_eq!(
            store.backend().get_item(LOGGED_IN_KEY).as_deref(),
            Some("true")
        );
        assert!(store.is_logged_in());
        store.set_logged_in(false);
        assert!(store.backend().get_item(LOGGED_IN_KEY).is_none());
    }

    #[test]
    fn other_flag_values_read_false() {
        let backend = MemoryStorage::new();
        backend.set_item(LOGGED_IN_KEY, "yes");
        assert!(!SessionStoreAdapter::new(backend).is_logged_in());
    }

    #[test]
    fn clear_session_keeps_record() {
        let store = memory_session();
        store.put(&record());
        store.set_logged_in(true);
        store.clear_session();
        assert!(!store.is_logged_in());
        assert_eq!(store.get(), Some(record()));
    }

    #[test]
    fn custom_keys_are_respected() {
        let keys = SessionKeys {
            user: "pe.user".into(),
            logged_in: "pe.session".into(),
        };
        let store = SessionStoreAdapter::with_keys(MemoryStorage::new(), keys);
        store.put(&record());
        store.set_logged_in(true);
        let raw = store.backend().snapshot();
        assert!(raw.contains_key("pe.user"));
        assert_eq!(raw.get("pe.session").map(String::as_str), Some("true"));
        assert!(!raw.contains_key(USER_KEY));
    }

    #[test]
    fn clones_share_memory() {
        let backend = MemoryStorage::new();
        let store = SessionStoreAdapter::new(backend.clone());
        store.set_logged_in(true);
        assert_eq!(backend.len(), 1);
        assert!(!backend.is_empty());
    }
}
