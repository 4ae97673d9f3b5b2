//! Intro choreography.
//!
//! DESIGN
//! ======
//!
//! The intro is a forward-only walk through [`IntroPhase`]:
//!
//! ```text
//! Idle -> NamesVisible -> Retracting -> Scrambling -> FinalDisplay -> Exiting -> Done
//! ```
//!
//! The head of the sequence (reveal, caption, retract, scramble, hide name)
//! is scheduled against the mount time. Everything after the scramble is a
//! causal chain: the title scramble's completion enters `FinalDisplay` and
//! schedules the power glow; each later cue is scheduled from the deadline of
//! the cue before it. A slow scramble therefore delays the tail instead of
//! letting it overtake the text it decorates.
//!
//! All cues live in one [`Timeline`]; [`IntroSequencer::teardown`] clears it
//! and no cue fires afterwards. [`IntroEvent::Completed`] is emitted at most
//! once per sequencer.

#[cfg(test)]
#[path = "intro_test.rs"]
mod intro_test;

use rand::Rng;

use crate::config::{IntroTimings, StageConfig};
use crate::consts;
use crate::scramble::{Scramble, ScrambleParams};
use crate::timeline::Timeline;

/// Phases of the intro, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroPhase {
    Idle,
    NamesVisible,
    Retracting,
    Scrambling,
    FinalDisplay,
    Exiting,
    Done,
}

/// Glow applied to the final logo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowLevel {
    Soft,
    Power,
    Steady,
}

/// Observable changes produced by [`IntroSequencer::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroEvent {
    Phase(IntroPhase),
    CaptionShown,
    NameHidden,
    Glow(GlowLevel),
    /// Scrambled text changed this frame.
    TextFrame,
    /// The exit finished. Emitted once.
    Completed,
}

/// Render snapshot of the intro.
#[derive(Clone, Debug, PartialEq)]
pub struct IntroView {
    pub phase: IntroPhase,
    /// Name and title are on screen.
    pub elements_visible: bool,
    /// The name has started retracting into its first letters.
    pub name_retracted: bool,
    pub name_hidden: bool,
    pub blur: bool,
    pub title: String,
    /// `None` until the caption cue.
    pub caption: Option<String>,
    /// `Some` once the final logo is showing.
    pub glow: Option<GlowLevel>,
    pub exiting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntroCue {
    Reveal,
    Caption,
    Retract,
    Scramble,
    HideName,
    PowerGlow,
    SteadyGlow,
    Exit,
    Finish,
}

/// Timed intro state machine; see the module docs.
#[derive(Clone, Debug)]
pub struct IntroSequencer {
    timings: IntroTimings,
    params: ScrambleParams,
    timeline: Timeline<IntroCue>,
    phase: IntroPhase,
    caption_visible: bool,
    name_hidden: bool,
    blur: bool,
    glow: Option<GlowLevel>,
    title: Option<Scramble>,
    caption: Option<Scramble>,
    completed: bool,
    torn_down: bool,
}

impl IntroSequencer {
    #[must_use]
    pub fn new(config: &StageConfig) -> Self {
        Self {
            timings: config.intro.clone(),
            params: ScrambleParams::intro(&config.scramble),
            timeline: Timeline::new(),
            phase: IntroPhase::Idle,
            caption_visible: false,
            name_hidden: false,
            blur: false,
            glow: None,
            title: None,
            caption: None,
            completed: false,
            torn_down: false,
        }
    }

    /// Schedule the head of the sequence relative to `now_ms`. Only the first
    /// call has any effect.
    pub fn start(&mut self, now_ms: f64) {
        if self.phase != IntroPhase::Idle || !self.timeline.is_empty() || self.torn_down {
            return;
        }
        let t = &self.timings;
        self.timeline.schedule(IntroCue::Reveal, now_ms + t.reveal_ms);
        self.timeline.schedule(IntroCue::Caption, now_ms + t.caption_ms);
        self.timeline.schedule(IntroCue::Retract, now_ms + t.retract_ms);
        self.timeline.schedule(IntroCue::Scramble, now_ms + t.scramble_ms);
        self.timeline.schedule(IntroCue::HideName, now_ms + t.hide_name_ms);
        log::debug!("intro: started at {now_ms}");
    }

    /// Fire due cues and advance running scrambles.
    pub fn tick<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> Vec<IntroEvent> {
        let mut events = Vec::new();
        if self.torn_down {
            return events;
        }
        self.fire_due(now_ms, &mut events);

        if let Some(caption) = self.caption.as_mut() {
            caption.frame(now_ms, rng);
        }
        if let Some(title) = self.title.as_mut() {
            let done = title.frame(now_ms, rng);
            events.push(IntroEvent::TextFrame);
            if done {
                self.scramble_finished(now_ms, &mut events);
                self.fire_due(now_ms, &mut events);
            }
        }
        events
    }

    /// Cancel every pending cue and stop the scrambles.
    pub fn teardown(&mut self) {
        self.timeline.cancel_all();
        self.title = None;
        self.caption = None;
        self.torn_down = true;
        log::debug!("intro: torn down in {:?}", self.phase);
    }

    #[must_use]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == IntroPhase::Done
    }

    /// Whether anything is still scheduled or animating.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.timeline.is_empty() || self.title.is_some()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.timeline.next_deadline()
    }

    #[must_use]
    pub fn view(&self) -> IntroView {
        let title = match (&self.title, self.phase) {
            (Some(s), _) => s.text().to_owned(),
            (None, p) if p >= IntroPhase::FinalDisplay => consts::INTRO_TITLE_END.to_owned(),
            (None, _) => consts::INTRO_TITLE_START.to_owned(),
        };
        let caption = self.caption_visible.then(|| match (&self.caption, self.phase) {
            (Some(s), _) => s.text().to_owned(),
            (None, p) if p >= IntroPhase::FinalDisplay => consts::INTRO_CAPTION_END.to_owned(),
            (None, _) => consts::INTRO_CAPTION_START.to_owned(),
        });
        IntroView {
            phase: self.phase,
            elements_visible: self.phase >= IntroPhase::NamesVisible,
            name_retracted: self.phase >= IntroPhase::Retracting,
            name_hidden: self.name_hidden,
            blur: self.blur,
            title,
            caption,
            glow: self.glow,
            exiting: self.phase >= IntroPhase::Exiting,
        }
    }

    fn fire_due(&mut self, now_ms: f64, events: &mut Vec<IntroEvent>) {
        while let Some((cue, at_ms)) = self.timeline.pop_due(now_ms) {
            self.apply(cue, at_ms, events);
        }
    }

    fn apply(&mut self, cue: IntroCue, at_ms: f64, events: &mut Vec<IntroEvent>) {
        match cue {
            IntroCue::Reveal => self.advance(IntroPhase::NamesVisible, events),
            IntroCue::Caption => {
                self.caption_visible = true;
                events.push(IntroEvent::CaptionShown);
            }
            IntroCue::Retract => {
                self.advance(IntroPhase::Retracting, events);
                self.blur = true;
            }
            IntroCue::Scramble => {
                self.advance(IntroPhase::Scrambling, events);
                self.title =
                    Some(Scramble::new(consts::INTRO_TITLE_START, consts::INTRO_TITLE_END, self.params.clone()));
                self.caption = Some(Scramble::new(
                    consts::INTRO_CAPTION_START,
                    consts::INTRO_CAPTION_END,
                    self.params.clone(),
                ));
                self.caption_visible = true;
            }
            IntroCue::HideName => self.hide_name(events),
            IntroCue::PowerGlow => {
                self.set_glow(GlowLevel::Power, events);
                self.timeline.schedule(IntroCue::SteadyGlow, at_ms + self.timings.steady_glow_ms);
            }
            IntroCue::SteadyGlow => {
                self.set_glow(GlowLevel::Steady, events);
                self.timeline.schedule(IntroCue::Exit, at_ms + self.timings.dwell_ms);
            }
            IntroCue::Exit => {
                self.advance(IntroPhase::Exiting, events);
                self.timeline.schedule(IntroCue::Finish, at_ms + self.timings.exit_ms);
            }
            IntroCue::Finish => {
                self.advance(IntroPhase::Done, events);
                if !self.completed {
                    self.completed = true;
                    log::debug!("intro: completed at {at_ms}");
                    events.push(IntroEvent::Completed);
                }
            }
        }
    }

    fn scramble_finished(&mut self, now_ms: f64, events: &mut Vec<IntroEvent>) {
        if self.phase != IntroPhase::Scrambling {
            return;
        }
        self.title = None;
        self.caption = None;
        self.blur = false;
        self.timeline.cancel(&IntroCue::HideName);
        self.hide_name(events);
        self.advance(IntroPhase::FinalDisplay, events);
        self.set_glow(GlowLevel::Soft, events);
        self.timeline.schedule(IntroCue::PowerGlow, now_ms + self.timings.power_glow_ms);
    }

    fn hide_name(&mut self, events: &mut Vec<IntroEvent>) {
        if !self.name_hidden {
            self.name_hidden = true;
            events.push(IntroEvent::NameHidden);
        }
    }

    fn set_glow(&mut self, level: GlowLevel, events: &mut Vec<IntroEvent>) {
        self.glow = Some(level);
        events.push(IntroEvent::Glow(level));
    }

    fn advance(&mut self, phase: IntroPhase, events: &mut Vec<IntroEvent>) {
        if phase <= self.phase {
            return;
        }
        log::debug!("intro: {:?} -> {phase:?}", self.phase);
        self.phase = phase;
        events.push(IntroEvent::Phase(phase));
    }
}
