//! Tunable timings and thresholds.
//!
//! Every field has a default equal to the reference constant in
//! [`crate::consts`], so a partial JSON document only overrides what it names.
//! [`StageConfig::from_json`] parses and validates in one step; callers fall
//! back to [`StageConfig::default`] when it fails.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::nav::EdgeMode;

/// Error returned by [`StageConfig::from_json`] and [`StageConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("intro cue `{later}` must be scheduled after `{earlier}`")]
    CueOrder { earlier: &'static str, later: &'static str },
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("`{field}` must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },
    #[error("scramble alphabet must not be empty")]
    EmptyAlphabet,
    #[error("wheel direction delta {direction} is below the minimum delta {minimum}")]
    WheelThresholds { minimum: f64, direction: f64 },
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StageConfig {
    pub intro: IntroTimings,
    pub navigation: NavigationConfig,
    pub scramble: ScrambleConfig,
    pub reveal: RevealConfig,
}

/// Intro cue offsets.
///
/// `reveal_ms` through `hide_name_ms` are measured from mount. The glow, dwell
/// and exit values are measured from the moment the scramble reports
/// completion, so the tail of the intro can never overtake its head.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntroTimings {
    pub reveal_ms: f64,
    pub caption_ms: f64,
    pub retract_ms: f64,
    pub scramble_ms: f64,
    pub hide_name_ms: f64,
    pub power_glow_ms: f64,
    pub steady_glow_ms: f64,
    pub dwell_ms: f64,
    pub exit_ms: f64,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            reveal_ms: consts::INTRO_REVEAL_MS,
            caption_ms: consts::INTRO_CAPTION_MS,
            retract_ms: consts::INTRO_RETRACT_MS,
            scramble_ms: consts::INTRO_SCRAMBLE_MS,
            hide_name_ms: consts::INTRO_HIDE_NAME_MS,
            power_glow_ms: consts::INTRO_POWER_GLOW_MS,
            steady_glow_ms: consts::INTRO_STEADY_GLOW_MS,
            dwell_ms: consts::INTRO_DWELL_MS,
            exit_ms: consts::INTRO_EXIT_MS,
        }
    }
}

/// Carousel behaviour and input thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationConfig {
    pub edge: EdgeMode,
    pub transition_ms: f64,
    pub wheel_min_delta: f64,
    pub wheel_direction_delta: f64,
    pub swipe_min_distance_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            edge: EdgeMode::Clamp,
            transition_ms: consts::NAV_TRANSITION_MS,
            wheel_min_delta: consts::WHEEL_MIN_DELTA,
            wheel_direction_delta: consts::WHEEL_DIRECTION_DELTA,
            swipe_min_distance_px: consts::SWIPE_MIN_DISTANCE_PX,
        }
    }
}

/// Scramble effect parameters shared by the intro and the header logo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrambleConfig {
    pub intro_duration_ms: f64,
    pub logo_duration_ms: f64,
    pub keep_probability: f64,
    pub snap_fraction: f64,
    pub alphabet: String,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            intro_duration_ms: consts::INTRO_SCRAMBLE_DURATION_MS,
            logo_duration_ms: consts::LOGO_SCRAMBLE_DURATION_MS,
            keep_probability: consts::SCRAMBLE_KEEP_PROBABILITY,
            snap_fraction: consts::SCRAMBLE_SNAP_FRACTION,
            alphabet: consts::SCRAMBLE_ALPHABET.to_owned(),
        }
    }
}

/// Post-intro curtain timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub curtain_hold_ms: f64,
    pub curtain_fade_ms: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { curtain_hold_ms: consts::CURTAIN_HOLD_MS, curtain_fade_ms: consts::CURTAIN_FADE_MS }
    }
}

impl StageConfig {
    /// Parse a (possibly partial) JSON document and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cue ordering, positivity and probability ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intro = &self.intro;
        let head = [
            ("revealMs", intro.reveal_ms),
            ("captionMs", intro.caption_ms),
            ("retractMs", intro.retract_ms),
            ("scrambleMs", intro.scramble_ms),
            ("hideNameMs", intro.hide_name_ms),
        ];
        for pair in head.windows(2) {
            let (earlier, a) = pair[0];
            let (later, b) = pair[1];
            if b <= a {
                return Err(ConfigError::CueOrder { earlier, later });
            }
        }

        positive("intro.revealMs", intro.reveal_ms)?;
        positive("intro.powerGlowMs", intro.power_glow_ms)?;
        positive("intro.steadyGlowMs", intro.steady_glow_ms)?;
        positive("intro.dwellMs", intro.dwell_ms)?;
        positive("intro.exitMs", intro.exit_ms)?;

        let nav = &self.navigation;
        positive("navigation.transitionMs", nav.transition_ms)?;
        positive("navigation.wheelMinDelta", nav.wheel_min_delta)?;
        positive("navigation.swipeMinDistancePx", nav.swipe_min_distance_px)?;
        if nav.wheel_direction_delta < nav.wheel_min_delta {
            return Err(ConfigError::WheelThresholds {
                minimum: nav.wheel_min_delta,
                direction: nav.wheel_direction_delta,
            });
        }

        let scramble = &self.scramble;
        positive("scramble.introDurationMs", scramble.intro_duration_ms)?;
        positive("scramble.logoDurationMs", scramble.logo_duration_ms)?;
        unit("scramble.keepProbability", scramble.keep_probability)?;
        unit("scramble.snapFraction", scramble.snap_fraction)?;
        if scramble.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        positive("reveal.curtainHoldMs", self.reveal.curtain_hold_ms)?;
        positive("reveal.curtainFadeMs", self.reveal.curtain_fade_ms)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}
