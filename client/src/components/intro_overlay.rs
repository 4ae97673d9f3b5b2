//! Full-screen intro shown before the site.
//!
//! DESIGN
//! ======
//! Pure projection of `IntroView`: every class below is toggled from the
//! engine snapshot, and all motion is CSS transitions keyed off those
//! classes. The only input is the corner theme switch, which goes through
//! `Site::set_theme` so the choice persists like the header toggle.

use leptos::prelude::*;
use stage::consts::INTRO_NAME;
use stage::intro::{GlowLevel, IntroView};
use stage::page::PageState;

use crate::state::site::{ClientSite, SiteHandle};
use crate::util::dark_mode;

fn glow_class(glow: Option<GlowLevel>) -> &'static str {
    match glow {
        None => "intro__title",
        Some(GlowLevel::Soft) => "intro__title intro__title--glow-soft",
        Some(GlowLevel::Power) => "intro__title intro__title--glow-power",
        Some(GlowLevel::Steady) => "intro__title intro__title--glow-steady",
    }
}

#[component]
pub fn IntroOverlay() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let view_state = Memo::new(move |_| site.with(ClientSite::intro_view));
    let visible = move || site.with(|s| s.page_state() == PageState::Intro);
    let dark = move || site.with(ClientSite::is_dark);
    let field = move |f: fn(&IntroView) -> bool| move || view_state.with(f);

    view! {
        <Show when=visible>
            <div class="intro" class:intro--exiting=field(|v| v.exiting) aria-hidden="true">
                <button
                    class="intro__theme-toggle"
                    title=move || dark_mode::toggle_label(dark())
                    on:click=move |_| {
                        site.dispatch(|s, _| s.set_theme(!s.is_dark()));
                    }
                >
                    {move || if dark() { "☀" } else { "☾" }}
                </button>
                <div class="intro__stage" class:intro__stage--visible=field(|v| v.elements_visible)>
                    <span
                        class="intro__name"
                        class:intro__name--retracted=field(|v| v.name_retracted)
                        class:intro__name--hidden=field(|v| v.name_hidden)
                        class:intro__name--blur=field(|v| v.blur)
                    >
                        {INTRO_NAME}
                    </span>
                    <h1 class=move || view_state.with(|v| glow_class(v.glow))>
                        {move || view_state.with(|v| v.title.clone())}
                    </h1>
                    <p class="intro__caption" class:intro__caption--visible=move || view_state.with(|v| v.caption.is_some())>
                        {move || view_state.with(|v| v.caption.clone().unwrap_or_default())}
                    </p>
                </div>
            </div>
        </Show>
    }
}
