//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use stage::sections::LegalPage;

use crate::pages::{landing::LandingPage, legal::LegalPageView};

/// Root application component.
///
/// The landing page provides its own engine context; legal pages are static.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="JT Lab | Web Development"/>
        <Meta name="description" content="Custom websites, e-commerce, SPAs and PWAs by Julio Tompsett."/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found." <a href="/">"Back"</a></p> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route
                    path=StaticSegment(LegalPage::Impressum.as_str())
                    view=|| view! { <LegalPageView page=LegalPage::Impressum/> }
                />
                <Route
                    path=StaticSegment(LegalPage::Datenschutz.as_str())
                    view=|| view! { <LegalPageView page=LegalPage::Datenschutz/> }
                />
                <Route
                    path=StaticSegment(LegalPage::Disclaimer.as_str())
                    view=|| view! { <LegalPageView page=LegalPage::Disclaimer/> }
                />
            </Routes>
        </Router>
    }
}
