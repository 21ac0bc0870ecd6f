//! `localStorage`-backed session storage.
use pevolutions_core::{AuthController, KeyValueStore, SessionStoreAdapter};

use crate::dom;

/// Session store the browser build runs on.
pub type BrowserSession = SessionStoreAdapter<BrowserStorage>;

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Storage failures (private mode quotas, disabled storage) are logged and
/// otherwise ignored, so reads come back empty and writes are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match dom::local_storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(err) => {
                log::warn!("localStorage read of '{key}' failed: {}", dom::js_error_message(&err));
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        let result = dom::local_storage().and_then(|storage| storage.set_item(key, value));
        if let Err(err) = result {
            log::warn!("localStorage write of '{key}' failed: {}", dom::js_error_message(&err));
        }
    }

    fn remove_item(&self, key: &str) {
        let result = dom::local_storage().and_then(|storage| storage.remove_item(key));
        if let Err(err) = result {
            log::warn!("localStorage remove of '{key}' failed: {}", dom::js_error_message(&err));
        }
    }
}

#[must_use]
pub fn browser_session() -> BrowserSession {
    SessionStoreAdapter::new(BrowserStorage)
}

/// Controller over the browser session, re-reading the stored flag.
#[must_use]
pub fn browser_auth() -> AuthController<BrowserSession> {
    AuthController::new(browser_session())
}
