//! Character-substitution text animation.
//!
//! A [`Scramble`] converges from a start string to an end string over a
//! fixed duration. Until the snap fraction is reached every position shows
//! either its original start character (with a small keep probability) or a
//! random alphabet character; past the snap fraction the end string is shown
//! verbatim. Completion is reported exactly once per run.
//!
//! The clock starts on the first frame after a (re)start, matching
//! `requestAnimationFrame` semantics where the first callback defines t=0.

#[cfg(test)]
#[path = "scramble_test.rs"]
mod scramble_test;

use rand::Rng;

use crate::config::ScrambleConfig;
use crate::consts;

/// Timing and alphabet for one scramble run.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleParams {
    pub duration_ms: f64,
    pub keep_probability: f64,
    pub snap_fraction: f64,
    pub alphabet: Vec<char>,
}

impl ScrambleParams {
    /// Parameters for the intro title/caption scramble.
    #[must_use]
    pub fn intro(config: &ScrambleConfig) -> Self {
        Self::with_duration(config, config.intro_duration_ms)
    }

    /// Parameters for the header logo hover scramble.
    #[must_use]
    pub fn logo(config: &ScrambleConfig) -> Self {
        Self::with_duration(config, config.logo_duration_ms)
    }

    fn with_duration(config: &ScrambleConfig, duration_ms: f64) -> Self {
        Self {
            duration_ms,
            keep_probability: config.keep_probability,
            snap_fraction: config.snap_fraction,
            alphabet: config.alphabet.chars().collect(),
        }
    }
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self::intro(&ScrambleConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunState {
    Running,
    Finished,
}

/// One restartable scramble animation.
#[derive(Clone, Debug)]
pub struct Scramble {
    params: ScrambleParams,
    start: Vec<char>,
    end: String,
    text: String,
    started_at: Option<f64>,
    state: RunState,
}

impl Scramble {
    /// Create a running scramble. The visible text starts as `start`.
    #[must_use]
    pub fn new(start: &str, end: &str, params: ScrambleParams) -> Self {
        Self {
            params,
            start: start.chars().collect(),
            end: end.to_owned(),
            text: start.to_owned(),
            started_at: None,
            state: RunState::Running,
        }
    }

    /// Create an idle scramble already showing `text`.
    #[must_use]
    pub fn resting(text: &str, params: ScrambleParams) -> Self {
        Self {
            params,
            start: text.chars().collect(),
            end: text.to_owned(),
            text: text.to_owned(),
            started_at: None,
            state: RunState::Finished,
        }
    }

    /// Abandon any in-flight run and start a fresh one for the new pair.
    pub fn restart(&mut self, start: &str, end: &str) {
        self.start = start.chars().collect();
        self.end = end.to_owned();
        self.started_at = None;
        self.state = RunState::Running;
    }

    /// Advance to `now_ms`. Returns `true` on the single frame where the run
    /// completes; every other call returns `false`.
    pub fn frame<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        if self.state == RunState::Finished {
            return false;
        }
        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = self.progress_at(started_at, now_ms);

        if progress >= 1.0 {
            self.text.clone_from(&self.end);
            self.state = RunState::Finished;
            return true;
        }
        if progress >= self.params.snap_fraction {
            self.text.clone_from(&self.end);
        } else {
            self.text = self.scrambled(rng);
        }
        false
    }

    /// Stop the current run and show its target text.
    pub fn cancel(&mut self) {
        self.text.clone_from(&self.end);
        self.state = RunState::Finished;
    }

    /// Currently displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Target text of the current (or last) run.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    fn progress_at(&self, started_at: f64, now_ms: f64) -> f64 {
        if self.params.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - started_at) / self.params.duration_ms).clamp(0.0, 1.0)
    }

    fn scrambled<R: Rng>(&self, rng: &mut R) -> String {
        let width = self.start.len().max(self.end.chars().count());
        (0..width)
            .map(|i| match self.start.get(i) {
                Some(&original) if rng.random::<f64>() < self.params.keep_probability => original,
                _ => self.random_char(rng),
            })
            .collect()
    }

    fn random_char<R: Rng>(&self, rng: &mut R) -> char {
        if self.params.alphabet.is_empty() {
            return ' ';
        }
        self.params.alphabet[rng.random_range(0..self.params.alphabet.len())]
    }
}

/// Header logo that scrambles to the full name while hovered.
#[derive(Clone, Debug)]
pub struct LogoScramble {
    hovering: bool,
    scramble: Scramble,
}

impl LogoScramble {
    #[must_use]
    pub fn new(params: ScrambleParams) -> Self {
        Self { hovering: false, scramble: Scramble::resting(consts::LOGO_REST_TEXT, params) }
    }

    pub fn hover_in(&mut self) {
        self.hovering = true;
        self.scramble.restart(consts::LOGO_REST_TEXT, consts::LOGO_HOVER_TEXT);
    }

    pub fn hover_out(&mut self) {
        self.hovering = false;
        self.scramble.restart(consts::LOGO_HOVER_TEXT, consts::LOGO_REST_TEXT);
    }

    /// Settle on the current run's target and stop animating.
    pub fn stop(&mut self) {
        self.scramble.cancel();
    }

    /// Advance the current run; see [`Scramble::frame`].
    pub fn frame<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        self.scramble.frame(now_ms, rng)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.scramble.text()
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scramble.is_running()
    }
}
