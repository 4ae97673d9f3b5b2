//! Signal wrapper around the presentation engine.
//!
//! DESIGN
//! ======
//! [`SiteHandle`] is `Copy` and provided via context by the landing page.
//! Every mutation goes through [`SiteHandle::dispatch`], which stamps the call
//! with the current `performance.now()` and then asks for animation frames if
//! the engine has anything in flight. Frame callbacks tick the engine and
//! only notify subscribers when the tick produced events, so an idle page
//! does not re-render.
//!
//! TRADE-OFFS
//! ==========
//! A single signal means every reader re-runs on any change. The page is
//! small and the views are cheap, so this is preferred over splitting the
//! engine into per-component signals that could drift apart.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use leptos::prelude::*;
use stage::config::StageConfig;
use stage::site::Site;

use crate::util::{clock, frame_loop, storage::BrowserStore};

/// The engine as wired to the browser.
pub type ClientSite = Site<BrowserStore>;

/// Context handle to the site engine.
#[derive(Clone, Copy)]
pub struct SiteHandle {
    site: RwSignal<ClientSite>,
    frame_pending: RwSignal<bool>,
}

impl SiteHandle {
    pub fn new(config: StageConfig, seed: u64) -> Self {
        Self {
            site: RwSignal::new(Site::new(config, BrowserStore::new(), seed)),
            frame_pending: RwSignal::new(false),
        }
    }

    /// Start the intro and the frame loop.
    pub fn mount(self) {
        self.dispatch(|site, now| site.mount(now));
    }

    /// Tracked read of the engine.
    pub fn with<T>(self, f: impl FnOnce(&ClientSite) -> T) -> T {
        self.site.with(f)
    }

    /// Untracked read of the engine, for event handlers.
    pub fn peek<T>(self, f: impl FnOnce(&ClientSite) -> T) -> Option<T> {
        self.site.try_with_untracked(f)
    }

    /// Mutate the engine at the current time and keep frames flowing.
    ///
    /// Returns `None` once the owning page has been disposed.
    pub fn dispatch<T>(self, f: impl FnOnce(&mut ClientSite, f64) -> T) -> Option<T> {
        let now = clock::now_ms();
        let out = self.site.try_update(|site| f(site, now));
        self.schedule();
        out
    }

    /// Like [`Self::dispatch`], but does not notify readers. For calls that
    /// only record input state (gesture tracking, hover) and change nothing
    /// on screen until a later frame or dispatch.
    pub fn dispatch_silent(self, f: impl FnOnce(&mut ClientSite)) -> bool {
        let done = self
            .site
            .try_maybe_update(|site| {
                f(site);
                (false, ())
            })
            .is_some();
        self.schedule();
        done
    }

    /// Cancel every pending engine cue.
    pub fn teardown(self) {
        if self.site.try_update(ClientSite::teardown).is_none() {
            log::debug!("site: already disposed at teardown");
        }
    }

    fn schedule(self) {
        if self.peek(ClientSite::needs_frames).unwrap_or(false) {
            frame_loop::request(self.frame_pending, move |ts| self.frame(ts));
        }
    }

    fn frame(self, now_ms: f64) {
        let ticked = self.site.try_maybe_update(|site| {
            let events = site.tick(now_ms);
            (!events.is_empty(), events.len())
        });
        match ticked {
            Some(count) if count > 0 => log::trace!("site: frame at {now_ms:.1} ({count} events)"),
            Some(_) => {}
            None => return,
        }
        self.schedule();
    }
}
