//! `localStorage` consent backend

use launchpad_core::consent::ConsentFlag;
use launchpad_core::{ConsentStorage, LaunchError, LaunchResult};
use web_sys::{Storage, Window};

use crate::error::JsResultExt;

/// Consent persisted under one key in `window.localStorage`.
///
/// Opting out clears the whole store before writing `"0"`, matching what the
/// cookie store does to the cookie jar.
#[derive(Debug, Clone)]
pub struct LocalStorageConsent {
    storage: Storage,
    key: String,
}

impl LocalStorageConsent {
    /// Store for `window`, or a DOM error if local storage is unavailable.
    pub fn new(window: &Window, key: impl Into<String>) -> LaunchResult<Self> {
        let storage = window
            .local_storage()
            .map_js_err(LaunchError::dom)?
            .ok_or_else(|| LaunchError::dom("localStorage is unavailable"))?;
        Ok(Self {
            storage,
            key: key.into(),
        })
    }
}

impl ConsentStorage for LocalStorageConsent {
    fn get(&self) -> bool {
        self.storage
            .get_item(&self.key)
            .ok()
            .flatten()
            .is_some_and(|value| ConsentFlag::from_value(&value).is_granted())
    }

    fn set(&self, enabled: bool) -> LaunchResult<()> {
        let flag = ConsentFlag::from(enabled);
        if !flag.is_granted() {
            self.storage.clear().map_js_err(LaunchError::consent_write)?;
        }
        self.storage
            .set_item(&self.key, flag.as_value())
            .map_js_err(LaunchError::consent_write)
    }
}
