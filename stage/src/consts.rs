//! Shared constants for the stage crate.

// ── Storage ─────────────────────────────────────────────────────

/// localStorage key holding `"true"` / `"false"` for dark mode.
pub const DARK_MODE_KEY: &str = "darkMode";

/// localStorage key holding the JSON consent record.
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";

// ── Intro timeline (ms after mount) ─────────────────────────────

pub const INTRO_REVEAL_MS: f64 = 1000.0;
pub const INTRO_CAPTION_MS: f64 = 1100.0;
pub const INTRO_RETRACT_MS: f64 = 3250.0;
pub const INTRO_SCRAMBLE_MS: f64 = 3750.0;
pub const INTRO_HIDE_NAME_MS: f64 = 4400.0;

// ── Intro timeline (ms after the scramble completes) ────────────

/// Delay from FinalDisplay entry to the power glow burst.
pub const INTRO_POWER_GLOW_MS: f64 = 200.0;
/// Delay from the power burst to the steady glow.
pub const INTRO_STEADY_GLOW_MS: f64 = 200.0;
/// How long the final logo stays on screen in the steady glow.
pub const INTRO_DWELL_MS: f64 = 4000.0;
/// Duration of the exit swish before completion fires.
pub const INTRO_EXIT_MS: f64 = 900.0;

// ── Scramble ────────────────────────────────────────────────────

/// Intro scramble duration per text element.
pub const INTRO_SCRAMBLE_DURATION_MS: f64 = 1000.0;
/// Header logo hover scramble duration.
pub const LOGO_SCRAMBLE_DURATION_MS: f64 = 200.0;
/// Chance that a position inside the start text keeps its original character.
pub const SCRAMBLE_KEEP_PROBABILITY: f64 = 0.2;
/// Progress fraction after which the end text is shown verbatim.
pub const SCRAMBLE_SNAP_FRACTION: f64 = 0.95;
/// Substitution alphabet: letters, digits and punctuation.
pub const SCRAMBLE_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,./<>?";

// ── Navigation ──────────────────────────────────────────────────

/// Duration of one section transition (matches the CSS transition).
pub const NAV_TRANSITION_MS: f64 = 1200.0;
/// Wheel deltas below this magnitude are ignored outright.
pub const WHEEL_MIN_DELTA: f64 = 10.0;
/// Wheel deltas must exceed this to count as a direction.
pub const WHEEL_DIRECTION_DELTA: f64 = 30.0;
/// Minimum horizontal swipe displacement in CSS pixels.
pub const SWIPE_MIN_DISTANCE_PX: f64 = 60.0;

// ── Reveal curtain ──────────────────────────────────────────────

/// How long the solid curtain holds after the intro completes.
pub const CURTAIN_HOLD_MS: f64 = 200.0;
/// How long the curtain takes to fade out.
pub const CURTAIN_FADE_MS: f64 = 800.0;

// ── Copy ────────────────────────────────────────────────────────

pub const INTRO_NAME: &str = "JulioTompsett's";
pub const INTRO_TITLE_START: &str = "Web Dev.";
pub const INTRO_TITLE_END: &str = "JT Lab";
pub const INTRO_CAPTION_START: &str = "Crafting Custom Websites: Business, E-commerce, Portfolios & More";
pub const INTRO_CAPTION_END: &str = "Landing Sites | SPA | PWA | Web | Mobile Optimized";
pub const LOGO_REST_TEXT: &str = "JT Lab";
pub const LOGO_HOVER_TEXT: &str = "JulioTompsett";
