//! Static content panels, one per section.
//!
//! Content is presentation-only. The only interactive pieces are the call
//! to action buttons, which report the target section through the
//! `on_navigate` callback supplied by the carousel.

pub mod about;
pub mod contact;
pub mod home;
pub mod portfolio;
pub mod services;

use leptos::prelude::*;
use stage::sections::SectionId;

/// Render the panel for `id`.
pub fn render(id: SectionId, on_navigate: Callback<SectionId>) -> AnyView {
    match id {
        SectionId::Home => view! { <home::HomeSection on_navigate/> }.into_any(),
        SectionId::Services => view! { <services::ServicesSection/> }.into_any(),
        SectionId::Portfolio => view! { <portfolio::PortfolioSection/> }.into_any(),
        SectionId::Contact => view! { <contact::ContactSection/> }.into_any(),
        SectionId::About => view! { <about::AboutSection on_navigate/> }.into_any(),
    }
}
