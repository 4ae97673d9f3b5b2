use super::*;

fn t() -> Thresholds {
    Thresholds::default()
}

// =============================================================
// Keys
// =============================================================

#[test]
fn arrow_keys_map_to_directions() {
    let cases = [
        ("ArrowRight", NavInput::Next),
        ("ArrowDown", NavInput::Next),
        ("ArrowLeft", NavInput::Previous),
        ("ArrowUp", NavInput::Previous),
        ("Home", NavInput::First),
        ("End", NavInput::Last),
    ];
    for (key, expected) in cases {
        let nav = NavKey::from_key(key).and_then(NavKey::nav_input);
        assert_eq!(nav, Some(expected), "key {key}");
    }
}

#[test]
fn escape_is_recognised_but_not_navigation() {
    assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Escape));
    assert_eq!(NavKey::Escape.nav_input(), None);
}

#[test]
fn unrelated_keys_are_ignored() {
    assert_eq!(NavKey::from_key("a"), None);
    assert_eq!(NavKey::from_key("PageDown"), None);
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn tiny_wheel_deltas_are_noise() {
    assert_eq!(interpret_wheel(9.0, &t()), None);
    assert_eq!(interpret_wheel(-9.0, &t()), None);
}

#[test]
fn medium_wheel_deltas_pick_no_direction() {
    assert_eq!(interpret_wheel(20.0, &t()), None);
    assert_eq!(interpret_wheel(-30.0, &t()), None);
}

#[test]
fn strong_wheel_deltas_navigate() {
    assert_eq!(interpret_wheel(31.0, &t()), Some(NavInput::Next));
    assert_eq!(interpret_wheel(-120.0, &t()), Some(NavInput::Previous));
}

// =============================================================
// Touch
// =============================================================

#[test]
fn left_swipe_past_threshold_advances() {
    let mut g = GestureTracker::new();
    g.touch_start(300.0);
    g.touch_move(260.0);
    g.touch_move(220.0);
    assert_eq!(g.touch_end(&t()), Some(NavInput::Next));
    assert!(!g.is_tracking());
}

#[test]
fn right_swipe_past_threshold_goes_back() {
    let mut g = GestureTracker::new();
    g.touch_start(100.0);
    g.touch_move(200.0);
    assert_eq!(g.touch_end(&t()), Some(NavInput::Previous));
}

#[test]
fn short_swipe_is_ignored() {
    let mut g = GestureTracker::new();
    g.touch_start(100.0);
    g.touch_move(141.0);
    assert_eq!(g.touch_end(&t()), None);
}

#[test]
fn tap_after_swipe_does_not_reuse_stale_position() {
    let mut g = GestureTracker::new();
    g.touch_start(300.0);
    g.touch_move(100.0);
    assert_eq!(g.touch_end(&t()), Some(NavInput::Next));

    g.touch_start(500.0);
    assert_eq!(g.touch_end(&t()), None);
}

#[test]
fn end_without_start_is_ignored() {
    let mut g = GestureTracker::new();
    g.touch_move(10.0);
    assert_eq!(g.touch_end(&t()), None);
}

#[test]
fn cancelled_gesture_yields_nothing() {
    let mut g = GestureTracker::new();
    g.touch_start(300.0);
    g.touch_move(0.0);
    g.cancel();
    assert_eq!(g.touch_end(&t()), None);
}
