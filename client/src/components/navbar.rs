//! Section links and the mobile burger menu.

use leptos::prelude::*;
use stage::sections::SectionId;

use crate::state::site::{ClientSite, SiteHandle};

/// Sections linked from the header; home is reached through the logo.
const NAV_SECTIONS: [SectionId; 4] = [SectionId::Services, SectionId::Portfolio, SectionId::Contact, SectionId::About];

#[component]
pub fn Navbar() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let menu_open = move || site.with(ClientSite::menu_open);
    let active = move || site.with(ClientSite::active_section);

    view! {
        <nav class="navbar" aria-label="Main navigation">
            <button
                class="navbar__burger"
                class:navbar__burger--open=menu_open
                aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| {
                    site.dispatch(|s, _| s.toggle_menu());
                }
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <ul class="navbar__links" class:navbar__links--open=menu_open>
                {NAV_SECTIONS
                    .into_iter()
                    .map(|id| {
                        view! {
                            <li>
                                <a
                                    class="navbar__link"
                                    class:navbar__link--active=move || active() == id
                                    href=format!("#{id}")
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        site.dispatch(|s, now| s.select_section(id, now));
                                    }
                                >
                                    {id.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
