//! Solid overlay bridging the intro and the revealed page.

use leptos::prelude::*;
use stage::page::PageState;

use crate::state::site::SiteHandle;

#[component]
pub fn Curtain() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let state = Memo::new(move |_| site.with(|s| s.page_state()));
    let fade_ms = site.with(|s| s.config().reveal.curtain_fade_ms);
    let shown = move || matches!(state.get(), PageState::Curtain | PageState::Fading);

    view! {
        <Show when=shown>
            <div
                class="curtain"
                class:curtain--fading=move || state.get() == PageState::Fading
                style=format!("transition-duration: {fade_ms}ms")
                aria-hidden="true"
            ></div>
        </Show>
    }
}
