//! Dark/light preference.
//!
//! The in-memory flag is authoritative for the session. Every change writes
//! through to the store; if the store fails the change still applies and a
//! warning is logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::DARK_MODE_KEY;
use crate::prefs::{PreferenceStore, PrefsError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    /// Read the persisted flag. Absent, malformed or unreadable values all
    /// mean light mode.
    pub fn load<S: PreferenceStore>(store: &S) -> Self {
        match read_flag(store) {
            Ok(dark) => Self { dark },
            Err(e) => {
                log::warn!("theme: {e}; using light mode");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the mode and persist it. Returns the new value.
    pub fn toggle<S: PreferenceStore>(&mut self, store: &mut S) -> bool {
        self.set(!self.dark, store);
        self.dark
    }

    /// Set the mode explicitly and persist it.
    pub fn set<S: PreferenceStore>(&mut self, dark: bool, store: &mut S) {
        self.dark = dark;
        let value = if dark { "true" } else { "false" };
        match store.set(DARK_MODE_KEY, value) {
            Ok(()) => log::debug!("theme: dark={dark}"),
            Err(e) => log::warn!("theme: dark={dark} not persisted: {e}"),
        }
    }
}

fn read_flag<S: PreferenceStore>(store: &S) -> Result<bool, PrefsError> {
    match store.get(DARK_MODE_KEY)?.as_deref() {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(PrefsError::Malformed {
            key: DARK_MODE_KEY.to_owned(),
            reason: format!("expected \"true\" or \"false\", got {other:?}"),
        }),
    }
}
