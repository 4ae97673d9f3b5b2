//! `localStorage`-backed preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`BrowserStore`] is the only [`PreferenceStore`] used in production. It is
//! a zero-sized handle: every call looks the storage object up again, so a
//! private browsing window that revokes storage mid-session degrades to
//! [`PrefsError::Unavailable`] instead of holding a dead reference.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use stage::prefs::{PreferenceStore, PrefsError};

/// Preference store over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl BrowserStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    let window = web_sys::window().ok_or(PrefsError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(PrefsError::Unavailable),
    }
}

#[cfg(feature = "csr")]
fn describe(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|_| PrefsError::Unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(PrefsError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|err| PrefsError::WriteRejected {
                key: key.to_owned(),
                reason: describe(&err),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(PrefsError::Unavailable)
        }
    }
}
