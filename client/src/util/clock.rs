//! Time and entropy sources for the engine.
//!
//! The engine never reads a clock itself. Event handlers pass
//! [`now_ms`] (same origin as requestAnimationFrame timestamps), consent
//! decisions pass [`now_utc`], and the site is seeded once from [`seed`].

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;

/// Monotonic milliseconds on the `performance.now()` origin.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or_else(js_sys::Date::now, |p| p.now())
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Wall-clock time for persisted timestamps.
pub fn now_utc() -> OffsetDateTime {
    #[cfg(feature = "csr")]
    {
        utc_from_epoch_ms(js_sys::Date::now()).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "csr"))]
    {
        OffsetDateTime::UNIX_EPOCH
    }
}

/// Convert JavaScript epoch milliseconds to a UTC timestamp.
///
/// Sub-millisecond fractions are truncated. Returns `None` for NaN, infinite
/// or out-of-range input.
#[allow(clippy::cast_possible_truncation)]
pub fn utc_from_epoch_ms(epoch_ms: f64) -> Option<OffsetDateTime> {
    if !epoch_ms.is_finite() {
        return None;
    }
    let nanos = i128::from(epoch_ms.trunc() as i64) * 1_000_000;
    match OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(ts) => Some(ts),
        Err(err) => {
            log::warn!("clock: epoch {epoch_ms} out of range: {err}");
            None
        }
    }
}

/// Seed for the scramble RNG.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        let low = js_sys::Date::now() as u64;
        (high << 32) ^ low
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
