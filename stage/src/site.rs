//! Top-level coordinator.
//!
//! SYSTEM CONTEXT
//! ==============
//!
//! [`Site`] owns every piece of presentation state and the preference store.
//! The browser host holds one `Site`, forwards DOM events and frame
//! timestamps to it, and renders from its accessors. There are no global
//! flags and no cross-component events: the intro's completion, the curtain
//! and the carousel reveal are wired here in plain method calls.
//!
//! ```text
//! tick(now)
//!   intro.tick ──Completed──▶ page.intro_completed
//!   page.tick ───Revealed───▶ carousel.reset + consent.reveal
//!   carousel.tick, logo.frame
//! ```

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use time::OffsetDateTime;

use crate::config::StageConfig;
use crate::consent::{ConsentCategory, ConsentChoices, ConsentFlow, ConsentRecord, ConsentView};
use crate::input::{GestureTracker, NavInput, NavKey, Thresholds, interpret_wheel};
use crate::intro::{IntroEvent, IntroSequencer, IntroView};
use crate::nav::{Carousel, NavEvent, NavOutcome, NavTarget, Rejection, SectionNavigator};
use crate::page::{PageEvent, PageFlow, PageState};
use crate::prefs::PreferenceStore;
use crate::scramble::{LogoScramble, ScrambleParams};
use crate::sections::SectionId;
use crate::theme::ThemeState;

/// Anything observable that changed during a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteEvent {
    Intro(IntroEvent),
    Page(PageEvent),
    Nav(NavEvent),
    NavStarted { from: SectionId, to: SectionId },
    LogoFrame,
    ThemeChanged { dark: bool },
    ConsentChanged,
    MenuChanged { open: bool },
}

/// Result of a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Navigated(NavOutcome),
    ClosedOverlay,
}

impl KeyOutcome {
    /// Whether the host should `preventDefault` the event.
    #[must_use]
    pub fn consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Owns all presentation state; see the module docs.
#[derive(Debug)]
pub struct Site<S> {
    config: StageConfig,
    store: S,
    theme: ThemeState,
    intro: IntroSequencer,
    page: PageFlow,
    carousel: Carousel,
    consent: ConsentFlow,
    logo: LogoScramble,
    gesture: GestureTracker,
    thresholds: Thresholds,
    menu_open: bool,
    rng: SmallRng,
}

impl<S: PreferenceStore> Site<S> {
    /// Build the site and read the theme preference once.
    pub fn new(config: StageConfig, store: S, seed: u64) -> Self {
        let theme = ThemeState::load(&store);
        Self {
            intro: IntroSequencer::new(&config),
            page: PageFlow::new(&config.reveal),
            carousel: Carousel::new(&config.navigation),
            consent: ConsentFlow::new(),
            logo: LogoScramble::new(ScrambleParams::logo(&config.scramble)),
            gesture: GestureTracker::new(),
            thresholds: Thresholds::from(&config.navigation),
            menu_open: false,
            rng: SmallRng::seed_from_u64(seed),
            theme,
            store,
            config,
        }
    }

    /// Start the intro clock.
    pub fn mount(&mut self, now_ms: f64) {
        log::info!("site: mounted (dark={}, edge={:?})", self.theme.is_dark(), self.carousel.edge());
        self.intro.start(now_ms);
    }

    /// Advance every timed component to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Vec<SiteEvent> {
        let mut events = Vec::new();

        for e in self.intro.tick(now_ms, &mut self.rng) {
            events.push(SiteEvent::Intro(e));
            if e == IntroEvent::Completed {
                if let Some(p) = self.page.intro_completed(now_ms) {
                    events.push(SiteEvent::Page(p));
                }
            }
        }

        for e in self.page.tick(now_ms) {
            events.push(SiteEvent::Page(e));
            if e == PageEvent::Revealed {
                self.carousel.reset();
                self.consent.reveal(&self.store);
                events.push(SiteEvent::ConsentChanged);
            }
        }

        if self.page.is_revealed() {
            events.extend(self.carousel.tick(now_ms).into_iter().map(SiteEvent::Nav));
        }

        if self.logo.is_running() {
            self.logo.frame(now_ms, &mut self.rng);
            events.push(SiteEvent::LogoFrame);
        }
        events
    }

    /// Whether the host must keep requesting frames.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.intro.is_active()
            || self.page.curtain_visible()
            || self.carousel.is_transitioning()
            || self.carousel.is_settling()
            || self.logo.is_running()
    }

    /// Cancel every pending cue across all components.
    pub fn teardown(&mut self) {
        self.intro.teardown();
        self.page.teardown();
        self.carousel.teardown();
        self.logo.stop();
        self.gesture.cancel();
        log::debug!("site: torn down");
    }

    // --- Theme ---

    pub fn toggle_theme(&mut self) -> SiteEvent {
        let dark = self.theme.toggle(&mut self.store);
        SiteEvent::ThemeChanged { dark }
    }

    /// Theme change requested by the intro.
    pub fn set_theme(&mut self, dark: bool) -> SiteEvent {
        self.theme.set(dark, &mut self.store);
        SiteEvent::ThemeChanged { dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    // --- Navigation ---

    pub fn go_to(&mut self, target: NavTarget, now_ms: f64) -> NavOutcome {
        if !self.page.is_revealed() {
            return NavOutcome::Rejected(Rejection::NotRevealed);
        }
        self.carousel.go_to(target, now_ms)
    }

    /// Navigate by section id string, as used by anchors and nav links.
    pub fn go_to_id(&mut self, id: &str, now_ms: f64) -> NavOutcome {
        match id.parse::<SectionId>() {
            Ok(section) => self.go_to(NavTarget::Section(section), now_ms),
            Err(e) => {
                log::debug!("site: {e}");
                NavOutcome::Rejected(Rejection::UnknownTarget)
            }
        }
    }

    pub fn navigate(&mut self, input: NavInput, now_ms: f64) -> NavOutcome {
        if !self.page.is_revealed() {
            return NavOutcome::Rejected(Rejection::NotRevealed);
        }
        self.carousel.apply(input, now_ms)
    }

    /// Whether wheel events over the carousel belong to navigation, so the
    /// host should stop them from scrolling panel content.
    #[must_use]
    pub fn captures_wheel(&self) -> bool {
        self.page.is_revealed() && !self.consent.is_modal_open()
    }

    pub fn wheel(&mut self, delta_y: f64, now_ms: f64) -> Option<NavOutcome> {
        if self.consent.is_modal_open() {
            return None;
        }
        let input = interpret_wheel(delta_y, &self.thresholds)?;
        Some(self.navigate(input, now_ms))
    }

    pub fn touch_start(&mut self, x: f64) {
        self.gesture.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.gesture.touch_move(x);
    }

    pub fn touch_cancel(&mut self) {
        self.gesture.cancel();
    }

    pub fn touch_end(&mut self, now_ms: f64) -> Option<NavOutcome> {
        let input = self.gesture.touch_end(&self.thresholds)?;
        if self.consent.is_modal_open() {
            return None;
        }
        Some(self.navigate(input, now_ms))
    }

    /// Handle a `keydown` with the DOM `key` value.
    pub fn key(&mut self, key: &str, now_ms: f64) -> KeyOutcome {
        let Some(key) = NavKey::from_key(key) else {
            return KeyOutcome::Ignored;
        };
        if key == NavKey::Escape {
            return self.close_overlays();
        }
        if self.consent.is_modal_open() {
            return KeyOutcome::Ignored;
        }
        match key.nav_input() {
            Some(input) if self.page.is_revealed() => KeyOutcome::Navigated(self.navigate(input, now_ms)),
            _ => KeyOutcome::Ignored,
        }
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.carousel.active_section()
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    // --- Header ---

    pub fn logo_hover(&mut self, hovering: bool) {
        if hovering == self.logo.is_hovering() {
            return;
        }
        if hovering {
            self.logo.hover_in();
        } else {
            self.logo.hover_out();
        }
    }

    /// Logo click: go home and close the mobile menu.
    pub fn logo_click(&mut self, now_ms: f64) -> NavOutcome {
        self.menu_open = false;
        self.go_to(NavTarget::Section(SectionId::Home), now_ms)
    }

    #[must_use]
    pub fn logo_text(&self) -> &str {
        self.logo.text()
    }

    pub fn toggle_menu(&mut self) -> SiteEvent {
        self.menu_open = !self.menu_open;
        SiteEvent::MenuChanged { open: self.menu_open }
    }

    /// Nav link click: navigate and close the mobile menu.
    pub fn select_section(&mut self, section: SectionId, now_ms: f64) -> NavOutcome {
        self.menu_open = false;
        self.go_to(NavTarget::Section(section), now_ms)
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    // --- Consent ---

    #[must_use]
    pub fn consent_view(&self) -> ConsentView {
        self.consent.view()
    }

    pub fn open_consent_settings(&mut self) {
        self.consent.open_settings(&self.store);
    }

    pub fn close_consent_settings(&mut self) {
        self.consent.close_settings();
    }

    pub fn toggle_consent(&mut self, category: ConsentCategory) {
        self.consent.toggle(category);
    }

    pub fn accept_all(&mut self, now: OffsetDateTime) -> Option<ConsentRecord> {
        self.consent.accept_all(&mut self.store, now)
    }

    pub fn reject_all(&mut self, now: OffsetDateTime) -> Option<ConsentRecord> {
        self.consent.reject_all(&mut self.store, now)
    }

    /// Persist explicit choices; `necessary` is always on.
    pub fn save_custom_consent(&mut self, choices: ConsentChoices, now: OffsetDateTime) -> Option<ConsentRecord> {
        self.consent.save_custom(choices, &mut self.store, now)
    }

    pub fn save_consent_settings(&mut self, now: OffsetDateTime) -> Option<ConsentRecord> {
        self.consent.save_draft(&mut self.store, now)
    }

    // --- Views ---

    #[must_use]
    pub fn intro_view(&self) -> IntroView {
        self.intro.view()
    }

    #[must_use]
    pub fn page_state(&self) -> PageState {
        self.page.state()
    }

    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn close_overlays(&mut self) -> KeyOutcome {
        if self.consent.is_modal_open() {
            self.consent.close_settings();
            KeyOutcome::ClosedOverlay
        } else if self.menu_open {
            self.menu_open = false;
            KeyOutcome::ClosedOverlay
        } else {
            KeyOutcome::Ignored
        }
    }
}
