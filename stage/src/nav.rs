//! Section carousel.
//!
//! DESIGN
//! ======
//!
//! [`Carousel`] owns the active slot and the transition lock. A transition
//! takes the lock before touching the slot and schedules a completion cue
//! tagged with a generation number; only the cue carrying the current
//! generation may release the lock.
//!
//! Two edge modes share the implementation:
//!
//! - [`EdgeMode::Clamp`]: slots are the real sections; `next`/`previous`
//!   stop at the ends and out-of-range indices clamp.
//! - [`EdgeMode::Loop`]: slots are `[clone_of_last, real.., clone_of_first]`.
//!   Moving past an end animates into the clone; when that transition
//!   completes the carousel re-indexes to the real slot with animation
//!   disabled and stays "settling" for one tick, during which input is
//!   rejected. The next [`SectionNavigator::tick`] re-enables animation.
//!
//! Clones never escape this module: [`SectionNavigator::active_section`]
//! always reports the real section.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::{Deserialize, Serialize};

use crate::config::NavigationConfig;
use crate::input::NavInput;
use crate::sections::{SectionDescriptor, SectionId};
use crate::timeline::Timeline;

/// How the carousel behaves at either end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    #[default]
    Clamp,
    Loop,
}

/// Where a `go_to` should land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Index into the real section list. Clamped or wrapped per edge mode.
    Index(usize),
    Section(SectionId),
}

impl From<usize> for NavTarget {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<SectionId> for NavTarget {
    fn from(id: SectionId) -> Self {
        Self::Section(id)
    }
}

/// Why a navigation request was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// A transition is in flight.
    Transitioning,
    /// A silent loop re-index happened this tick.
    Settling,
    /// The target is the current position.
    AlreadyThere,
    /// Clamp mode and already at the requested end.
    AtEdge,
    /// The section is not part of this carousel.
    UnknownTarget,
    /// Main content is not revealed yet.
    NotRevealed,
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Started { from: SectionId, to: SectionId },
    Rejected(Rejection),
}

impl NavOutcome {
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// State changes reported by [`SectionNavigator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The in-flight transition finished and the lock is released.
    TransitionFinished { active: SectionId },
    /// Loop mode landed on a clone and jumped to the real slot unanimated.
    Snapped { active: SectionId },
    /// Animation is back on after a snap; input is accepted again.
    Settled,
}

/// Contract shared by anything that decides which section is on screen.
pub trait SectionNavigator {
    fn active_section(&self) -> SectionId;

    fn is_transitioning(&self) -> bool;

    fn go_to(&mut self, target: NavTarget, now_ms: f64) -> NavOutcome;

    fn next(&mut self, now_ms: f64) -> NavOutcome;

    fn previous(&mut self, now_ms: f64) -> NavOutcome;

    /// Fire due completion cues.
    fn tick(&mut self, now_ms: f64) -> Vec<NavEvent>;

    /// Route an interpreted input event.
    fn apply(&mut self, input: NavInput, now_ms: f64) -> NavOutcome;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavCue {
    Complete { generation: u64 },
}

/// Section carousel with a transition lock; see the module docs.
#[derive(Clone, Debug)]
pub struct Carousel {
    edge: EdgeMode,
    sections: Vec<SectionId>,
    slot: usize,
    transitioning: bool,
    settling: bool,
    animate: bool,
    generation: u64,
    transition_ms: f64,
    timeline: Timeline<NavCue>,
}

impl Carousel {
    /// Carousel over the canonical section list.
    #[must_use]
    pub fn new(config: &NavigationConfig) -> Self {
        Self::with_sections(SectionId::ALL.to_vec(), config)
    }

    /// Carousel over an explicit section list. An empty list falls back to
    /// the canonical one.
    #[must_use]
    pub fn with_sections(sections: Vec<SectionId>, config: &NavigationConfig) -> Self {
        let sections = if sections.is_empty() { SectionId::ALL.to_vec() } else { sections };
        let mut carousel = Self {
            edge: config.edge,
            sections,
            slot: 0,
            transitioning: false,
            settling: false,
            animate: true,
            generation: 0,
            transition_ms: config.transition_ms,
            timeline: Timeline::new(),
        };
        carousel.slot = carousel.slot_of(0);
        carousel
    }

    #[must_use]
    pub fn edge(&self) -> EdgeMode {
        self.edge
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Index of the active section in the real list.
    #[must_use]
    pub fn active_index(&self) -> usize {
        let n = self.sections.len();
        match self.edge {
            EdgeMode::Clamp => self.slot,
            EdgeMode::Loop if self.slot == 0 => n - 1,
            EdgeMode::Loop if self.slot == n + 1 => 0,
            EdgeMode::Loop => self.slot - 1,
        }
    }

    /// Raw track slot, including clone slots in loop mode.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        match self.edge {
            EdgeMode::Clamp => self.sections.len(),
            EdgeMode::Loop => self.sections.len() + 2,
        }
    }

    /// Rendered track, clones included.
    #[must_use]
    pub fn slots(&self) -> Vec<SectionDescriptor> {
        let real = self.sections.iter().copied().map(SectionDescriptor::real);
        match (self.edge, self.sections.first(), self.sections.last()) {
            (EdgeMode::Loop, Some(&first), Some(&last)) => std::iter::once(SectionDescriptor::clone_of(last))
                .chain(real)
                .chain(std::iter::once(SectionDescriptor::clone_of(first)))
                .collect(),
            _ => real.collect(),
        }
    }

    /// Horizontal offset of the track as a percentage of its own width.
    /// The track is `slot_count` panels wide, so each slot is `100 / slot_count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn track_offset_percent(&self) -> f64 {
        self.slot as f64 * 100.0 / self.slot_count() as f64
    }

    /// Whether the track should animate its next layout change.
    #[must_use]
    pub fn animates(&self) -> bool {
        self.animate
    }

    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    #[must_use]
    pub fn transition_ms(&self) -> f64 {
        self.transition_ms
    }

    /// Clamp mode and on the first section.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.edge == EdgeMode::Clamp && self.slot == 0
    }

    /// Clamp mode and on the last section.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.edge == EdgeMode::Clamp && self.slot + 1 == self.sections.len()
    }

    /// Earliest pending cue, for hosts that sleep between frames.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.timeline.next_deadline()
    }

    /// Cancel the pending completion and drop the lock.
    pub fn teardown(&mut self) {
        self.timeline.cancel_all();
        if self.is_clone_slot(self.slot) {
            self.slot = self.slot_of(self.active_index());
        }
        self.transitioning = false;
        self.settling = false;
        self.animate = true;
    }

    /// Jump to the first section without animating. Used when the page is
    /// first revealed.
    pub fn reset(&mut self) {
        self.teardown();
        self.slot = self.slot_of(0);
    }

    fn slot_of(&self, real_index: usize) -> usize {
        match self.edge {
            EdgeMode::Clamp => real_index,
            EdgeMode::Loop => real_index + 1,
        }
    }

    fn is_clone_slot(&self, slot: usize) -> bool {
        self.edge == EdgeMode::Loop && (slot == 0 || slot == self.sections.len() + 1)
    }

    fn guard(&self) -> Result<(), Rejection> {
        if self.transitioning {
            Err(Rejection::Transitioning)
        } else if self.settling {
            Err(Rejection::Settling)
        } else {
            Ok(())
        }
    }

    fn resolve(&self, target: NavTarget) -> Result<usize, Rejection> {
        let n = self.sections.len();
        let real = match target {
            NavTarget::Index(i) => match self.edge {
                EdgeMode::Clamp => i.min(n - 1),
                EdgeMode::Loop => i % n,
            },
            NavTarget::Section(id) => {
                self.sections.iter().position(|s| *s == id).ok_or(Rejection::UnknownTarget)?
            }
        };
        Ok(self.slot_of(real))
    }

    fn begin(&mut self, slot: usize, now_ms: f64) -> NavOutcome {
        let from = self.active_section();
        self.transitioning = true;
        self.generation += 1;
        self.slot = slot;
        self.animate = true;
        self.timeline.schedule(NavCue::Complete { generation: self.generation }, now_ms + self.transition_ms);
        let to = self.active_section();
        log::debug!("nav: transition {from} -> {to} (slot {slot})");
        NavOutcome::Started { from, to }
    }

    fn reject(reason: Rejection) -> NavOutcome {
        log::debug!("nav: request dropped ({reason:?})");
        NavOutcome::Rejected(reason)
    }

    fn step(&mut self, forward: bool, now_ms: f64) -> NavOutcome {
        if let Err(reason) = self.guard() {
            return Self::reject(reason);
        }
        let slot = match (self.edge, forward) {
            (EdgeMode::Clamp, true) if self.at_end() => return Self::reject(Rejection::AtEdge),
            (EdgeMode::Clamp, false) if self.at_start() => return Self::reject(Rejection::AtEdge),
            (_, true) => self.slot + 1,
            (_, false) => self.slot - 1,
        };
        self.begin(slot, now_ms)
    }
}

impl SectionNavigator for Carousel {
    fn active_section(&self) -> SectionId {
        self.sections.get(self.active_index()).copied().unwrap_or(SectionId::Home)
    }

    fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    fn go_to(&mut self, target: NavTarget, now_ms: f64) -> NavOutcome {
        if let Err(reason) = self.guard() {
            return Self::reject(reason);
        }
        let slot = match self.resolve(target) {
            Ok(slot) => slot,
            Err(reason) => return Self::reject(reason),
        };
        if slot == self.slot {
            return Self::reject(Rejection::AlreadyThere);
        }
        self.begin(slot, now_ms)
    }

    fn next(&mut self, now_ms: f64) -> NavOutcome {
        self.step(true, now_ms)
    }

    fn previous(&mut self, now_ms: f64) -> NavOutcome {
        self.step(false, now_ms)
    }

    fn tick(&mut self, now_ms: f64) -> Vec<NavEvent> {
        let mut events = Vec::new();
        if self.settling {
            self.settling = false;
            self.animate = true;
            events.push(NavEvent::Settled);
        }
        while let Some((NavCue::Complete { generation }, _)) = self.timeline.pop_due(now_ms) {
            if generation != self.generation {
                log::debug!("nav: stale completion {generation} ignored");
                continue;
            }
            self.transitioning = false;
            if self.is_clone_slot(self.slot) {
                self.slot = self.slot_of(self.active_index());
                self.animate = false;
                self.settling = true;
                events.push(NavEvent::Snapped { active: self.active_section() });
            }
            events.push(NavEvent::TransitionFinished { active: self.active_section() });
        }
        events
    }

    fn apply(&mut self, input: NavInput, now_ms: f64) -> NavOutcome {
        match input {
            NavInput::Next => self.next(now_ms),
            NavInput::Previous => self.previous(now_ms),
            NavInput::First => self.go_to(NavTarget::Index(0), now_ms),
            NavInput::Last => self.go_to(NavTarget::Index(self.sections.len() - 1), now_ms),
        }
    }
}
