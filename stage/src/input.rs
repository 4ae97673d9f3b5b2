//! Wheel, touch and keyboard interpretation for the carousel.
//!
//! The host forwards raw event values; this module turns them into a
//! [`NavInput`] or nothing. Thresholds come from
//! [`NavigationConfig`](crate::config::NavigationConfig) so the host never
//! hardcodes magnitudes.
//!
//! TRADE-OFFS
//! ==========
//!
//! Swipes are judged once, at touch end, on total displacement. That loses
//! flick velocity but keeps a slow drag from firing mid-gesture, and it makes
//! the decision a pure function of start and last positions.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::config::NavigationConfig;

/// Direction-level navigation request produced by any input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavInput {
    Next,
    Previous,
    First,
    Last,
}

/// Keys the site reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Escape,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Navigation meaning of the key. `Escape` has none; it closes dialogs.
    #[must_use]
    pub fn nav_input(self) -> Option<NavInput> {
        match self {
            Self::ArrowRight | Self::ArrowDown => Some(NavInput::Next),
            Self::ArrowLeft | Self::ArrowUp => Some(NavInput::Previous),
            Self::Home => Some(NavInput::First),
            Self::End => Some(NavInput::Last),
            Self::Escape => None,
        }
    }
}

/// Wheel and swipe thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub wheel_min_delta: f64,
    pub wheel_direction_delta: f64,
    pub swipe_min_distance_px: f64,
}

impl From<&NavigationConfig> for Thresholds {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            wheel_min_delta: config.wheel_min_delta,
            wheel_direction_delta: config.wheel_direction_delta,
            swipe_min_distance_px: config.swipe_min_distance_px,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from(&NavigationConfig::default())
    }
}

/// Interpret one wheel event's vertical delta.
///
/// Deltas under the minimum are noise. Deltas between the minimum and the
/// direction threshold are honoured as "not accidental" but too weak to pick
/// a direction, so they also yield nothing.
#[must_use]
pub fn interpret_wheel(delta_y: f64, thresholds: &Thresholds) -> Option<NavInput> {
    if delta_y.abs() < thresholds.wheel_min_delta {
        return None;
    }
    if delta_y > thresholds.wheel_direction_delta {
        Some(NavInput::Next)
    } else if delta_y < -thresholds.wheel_direction_delta {
        Some(NavInput::Previous)
    } else {
        None
    }
}

/// Tracks one horizontal touch gesture from start to end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureTracker {
    start_x: Option<f64>,
    last_x: f64,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture. A touch with no move reads as zero displacement.
    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.last_x = x;
    }

    pub fn touch_move(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.last_x = x;
        }
    }

    /// Finish the gesture. Swiping left (finger moving toward smaller x)
    /// advances; swiping right goes back.
    pub fn touch_end(&mut self, thresholds: &Thresholds) -> Option<NavInput> {
        let start = self.start_x.take()?;
        let diff = start - self.last_x;
        if diff.abs() < thresholds.swipe_min_distance_px {
            return None;
        }
        if diff > 0.0 { Some(NavInput::Next) } else { Some(NavInput::Previous) }
    }

    /// Drop an interrupted gesture (`touchcancel`).
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
