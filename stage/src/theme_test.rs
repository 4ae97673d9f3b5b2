use super::*;
use crate::prefs::MemoryStore;

// =============================================================
// Loading
// =============================================================

#[test]
fn absent_flag_means_light_mode() {
    assert!(!ThemeState::load(&MemoryStore::new()).is_dark());
}

#[test]
fn stored_true_means_dark_mode() {
    let store = MemoryStore::new().with(DARK_MODE_KEY, "true");
    assert!(ThemeState::load(&store).is_dark());
}

#[test]
fn malformed_flag_falls_back_to_light_mode() {
    let store = MemoryStore::new().with(DARK_MODE_KEY, "yes please");
    assert!(!ThemeState::load(&store).is_dark());
}

#[test]
fn unavailable_storage_falls_back_to_light_mode() {
    assert!(!ThemeState::load(&MemoryStore::unavailable()).is_dark());
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_writes_through() {
    let mut store = MemoryStore::new();
    let mut theme = ThemeState::load(&store);
    assert!(theme.toggle(&mut store));
    assert_eq!(store.peek(DARK_MODE_KEY), Some("true"));
}

#[test]
fn double_toggle_restores_memory_and_storage() {
    let mut store = MemoryStore::new().with(DARK_MODE_KEY, "false");
    let mut theme = ThemeState::load(&store);
    theme.toggle(&mut store);
    theme.toggle(&mut store);
    assert!(!theme.is_dark());
    assert_eq!(store.peek(DARK_MODE_KEY), Some("false"));
}

#[test]
fn toggle_without_storage_still_changes_session_value() {
    let mut store = MemoryStore::unavailable();
    let mut theme = ThemeState::load(&store);
    assert!(theme.toggle(&mut store));
    assert!(theme.is_dark());
    assert_eq!(store.peek(DARK_MODE_KEY), None);
}

#[test]
fn explicit_set_persists() {
    let mut store = MemoryStore::new();
    let mut theme = ThemeState::default();
    theme.set(true, &mut store);
    assert!(theme.is_dark());
    assert_eq!(store.peek(DARK_MODE_KEY), Some("true"));
}
