//! The single-page site: intro, curtain, header, carousel, consent.
//!
//! SYSTEM CONTEXT
//! ==============
//! A fresh `SiteHandle` is created per mount, so returning from a legal page
//! replays the intro. Keyboard input is captured at the window; wheel and
//! touch input are bound on the carousel itself. Unmounting tears the engine
//! down so no queued cue outlives the page.

use leptos::prelude::*;
use stage::page::PageState;

use crate::components::carousel::Carousel;
use crate::components::cookie_banner::CookieBanner;
use crate::components::curtain::Curtain;
use crate::components::header::Header;
use crate::components::intro_overlay::IntroOverlay;
use crate::state::site::{ClientSite, SiteHandle};
use crate::util::{clock, config, dark_mode};

#[component]
pub fn LandingPage() -> impl IntoView {
    let site = SiteHandle::new(config::load(), clock::seed());
    provide_context(site);

    let dark = Memo::new(move |_| site.with(ClientSite::is_dark));
    Effect::new(move || dark_mode::apply(dark.get()));

    let page_state = Memo::new(move |_| site.with(ClientSite::page_state));
    let content_mounted = move || page_state.get() != PageState::Intro;
    let revealed = move || page_state.get() == PageState::Revealed;

    #[cfg(feature = "csr")]
    {
        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = ev.key();
            if let Some(outcome) = site.dispatch(|s, now| s.key(&key, now)) {
                if outcome.consumed() {
                    ev.prevent_default();
                }
            }
        });
        on_cleanup(move || keys.remove());
    }
    on_cleanup(move || site.teardown());

    site.mount();

    view! {
        <div class="landing" class:landing--revealed=revealed>
            <IntroOverlay/>
            <Show when=content_mounted>
                <Header/>
                <Carousel/>
                <CookieBanner/>
            </Show>
            <Curtain/>
        </div>
    }
}
