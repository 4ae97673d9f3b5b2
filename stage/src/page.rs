//! Intro -> curtain -> revealed page flow.
//!
//! When the intro reports completion a solid curtain in the theme background
//! colour covers the page, holds briefly, then fades out. Main content is
//! revealed when the fade ends. Navigation and the consent flow stay gated
//! until then.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::RevealConfig;
use crate::timeline::Timeline;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageState {
    Intro,
    /// Opaque curtain, intro unmounted.
    Curtain,
    /// Curtain fading out.
    Fading,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    CurtainUp,
    FadeStarted,
    /// Main content is visible. Emitted once.
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageCue {
    Fade,
    Reveal,
}

#[derive(Clone, Debug)]
pub struct PageFlow {
    reveal: RevealConfig,
    state: PageState,
    timeline: Timeline<PageCue>,
    torn_down: bool,
}

impl PageFlow {
    #[must_use]
    pub fn new(reveal: &RevealConfig) -> Self {
        Self { reveal: reveal.clone(), state: PageState::Intro, timeline: Timeline::new(), torn_down: false }
    }

    /// Handle the intro's completion signal. Repeated calls are ignored.
    pub fn intro_completed(&mut self, now_ms: f64) -> Option<PageEvent> {
        if self.torn_down || self.state != PageState::Intro {
            log::debug!("page: duplicate intro completion ignored");
            return None;
        }
        self.state = PageState::Curtain;
        self.timeline.schedule(PageCue::Fade, now_ms + self.reveal.curtain_hold_ms);
        Some(PageEvent::CurtainUp)
    }

    pub fn tick(&mut self, now_ms: f64) -> Vec<PageEvent> {
        let mut events = Vec::new();
        while let Some((cue, at_ms)) = self.timeline.pop_due(now_ms) {
            match cue {
                PageCue::Fade => {
                    self.state = PageState::Fading;
                    self.timeline.schedule(PageCue::Reveal, at_ms + self.reveal.curtain_fade_ms);
                    events.push(PageEvent::FadeStarted);
                }
                PageCue::Reveal => {
                    self.state = PageState::Revealed;
                    log::debug!("page: revealed at {at_ms}");
                    events.push(PageEvent::Revealed);
                }
            }
        }
        events
    }

    #[must_use]
    pub fn state(&self) -> PageState {
        self.state
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == PageState::Revealed
    }

    /// The intro is still on screen.
    #[must_use]
    pub fn shows_intro(&self) -> bool {
        self.state == PageState::Intro
    }

    /// Curtain is mounted (opaque or fading). Always false after teardown.
    #[must_use]
    pub fn curtain_visible(&self) -> bool {
        !self.torn_down && matches!(self.state, PageState::Curtain | PageState::Fading)
    }

    #[must_use]
    pub fn fade_ms(&self) -> f64 {
        self.reveal.curtain_fade_ms
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.timeline.next_deadline()
    }

    /// Drop pending cues. Later completions and ticks are ignored.
    pub fn teardown(&mut self) {
        self.timeline.cancel_all();
        self.torn_down = true;
    }
}
