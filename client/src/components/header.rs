//! Fixed site header: logo, section links, theme switch.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::scramble_logo::ScrambleLogo;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <ScrambleLogo/>
            <Navbar/>
            <ThemeToggle/>
        </header>
    }
}
