//! DOM event value extraction for carousel input.
//!
//! `stage::input` decides what a wheel delta or swipe means; this module only
//! turns raw DOM events into the pixel values it expects.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// `WheelEvent.deltaMode` for pixel deltas.
pub const DELTA_PIXEL: u32 = 0;
/// `WheelEvent.deltaMode` for line deltas (Firefox with a mouse wheel).
pub const DELTA_LINE: u32 = 1;
/// `WheelEvent.deltaMode` for page deltas.
pub const DELTA_PAGE: u32 = 2;

/// Pixels per wheel "line".
pub const LINE_HEIGHT_PX: f64 = 16.0;

#[cfg(feature = "csr")]
const FALLBACK_VIEWPORT_PX: f64 = 800.0;

/// Convert a wheel delta to pixels so thresholds behave the same across
/// browsers. Unknown modes pass through unchanged.
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, viewport_height: f64) -> f64 {
    match delta_mode {
        DELTA_LINE => delta_y * LINE_HEIGHT_PX,
        DELTA_PAGE => delta_y * viewport_height,
        _ => delta_y,
    }
}

/// Normalised vertical delta of a wheel event.
pub fn wheel_event_delta(ev: &leptos::ev::WheelEvent) -> f64 {
    #[cfg(feature = "csr")]
    {
        wheel_delta_px(ev.delta_y(), ev.delta_mode(), viewport_height())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        0.0
    }
}

/// Horizontal position of the first active touch.
pub fn first_touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        ev.touches().get(0).map(|t| f64::from(t.client_x()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}

#[cfg(feature = "csr")]
fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_PX)
}
