//! Light/dark switch shown in the header.

use leptos::prelude::*;

use crate::state::site::{ClientSite, SiteHandle};
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let dark = move || site.with(ClientSite::is_dark);

    view! {
        <button
            class="theme-toggle"
            class:theme-toggle--dark=dark
            aria-label=move || dark_mode::toggle_label(dark())
            title=move || dark_mode::toggle_label(dark())
            on:click=move |_| {
                site.dispatch(|s, _| s.toggle_theme());
            }
        >
            <span class="theme-toggle__icon" aria-hidden="true">
                {move || if dark() { "☀" } else { "☾" }}
            </span>
        </button>
    }
}
