//! Header logo that scrambles between "JT Lab" and the full name on hover.

use leptos::prelude::*;
use stage::consts::LOGO_REST_TEXT;

use crate::state::site::SiteHandle;

/// Clickable logo; returns to the home section.
#[component]
pub fn ScrambleLogo() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let text = move || site.with(|s| s.logo_text().to_owned());
    let expanded = move || site.with(|s| s.logo_text() != LOGO_REST_TEXT);

    let go_home = move || {
        if let Some(outcome) = site.dispatch(|s, now| s.logo_click(now)) {
            log::debug!("logo: home -> {outcome:?}");
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" || ev.key() == " " {
            ev.prevent_default();
            go_home();
        }
    };

    view! {
        <div
            class="scramble-logo"
            class:scramble-logo--expanded=expanded
            role="button"
            tabindex="0"
            aria-label="Go to home section"
            on:mouseenter=move |_| {
                site.dispatch_silent(|s| s.logo_hover(true));
            }
            on:mouseleave=move |_| {
                site.dispatch_silent(|s| s.logo_hover(false));
            }
            on:click=move |_| go_home()
            on:keydown=on_keydown
        >
            <span class="scramble-logo__text">{text}</span>
        </div>
    }
}
