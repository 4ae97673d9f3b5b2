//! Key-value preference store.
//!
//! The site persists exactly two keys (see [`crate::consts`]). The browser
//! implementation lives in the client crate; [`MemoryStore`] backs tests and
//! sessions where storage is unavailable.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::collections::HashMap;

/// Failure reading or writing a preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefsError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("storage rejected write to `{key}`: {reason}")]
    WriteRejected { key: String, reason: String },
    #[error("malformed value for `{key}`: {reason}")]
    Malformed { key: String, reason: String },
}

/// Synchronous string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// In-memory store. Can be switched to "unavailable" to exercise the
/// degraded paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with [`PrefsError::Unavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self { values: HashMap::new(), unavailable: true }
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Raw read that bypasses the availability flag.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        if self.unavailable {
            return Err(PrefsError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        if self.unavailable {
            return Err(PrefsError::Unavailable);
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
