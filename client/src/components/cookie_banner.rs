//! Consent banner and the persistent settings icon.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whichever surface `ConsentView` names. Nothing shows until the
//! page is revealed (`ConsentView::Hidden`). Decisions are stamped with the
//! wall clock here; the engine only persists what it is given.

use leptos::prelude::*;
use stage::consent::ConsentView;
use stage::sections::LegalPage;

use crate::components::cookie_settings_modal::CookieSettingsModal;
use crate::state::site::{ClientSite, SiteHandle};
use crate::util::clock;

#[component]
pub fn CookieBanner() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let consent = Memo::new(move |_| site.with(ClientSite::consent_view));
    let banner = move || consent.get() == ConsentView::Banner;
    let icon = move || consent.get() == ConsentView::Icon;
    let modal = move || matches!(consent.get(), ConsentView::Modal { .. });

    let accept_all = move |_| {
        if let Some(Some(record)) = site.dispatch(|s, _| s.accept_all(clock::now_utc())) {
            log::info!("consent: accepted all at {}", record.timestamp);
        }
    };
    let reject_all = move |_| {
        if let Some(Some(record)) = site.dispatch(|s, _| s.reject_all(clock::now_utc())) {
            log::info!("consent: rejected optional at {}", record.timestamp);
        }
    };
    let open_settings = move |_| {
        site.dispatch(|s, _| s.open_consent_settings());
    };

    view! {
        <div class="cookie-banner" class:cookie-banner--visible=banner role="region" aria-label="Cookie consent">
            <p class="cookie-banner__text">
                "We use cookies to improve your browsing experience. Some cookies are necessary for the website to function while others help us understand how you interact with our site. "
                <a class="cookie-banner__link" href=LegalPage::Datenschutz.path()>
                    "Cookie Policy"
                </a>
            </p>
            <div class="cookie-banner__actions">
                <button class="button" on:click=reject_all>"Reject All"</button>
                <button class="button button--secondary" on:click=open_settings>"Settings"</button>
                <button class="button button--primary" on:click=accept_all>"Accept All"</button>
            </div>
        </div>
        <button
            class="cookie-icon"
            class:cookie-icon--visible=icon
            aria-label="Cookie Settings"
            title="Cookie Settings"
            on:click=open_settings
        >
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="10" fill="none" stroke="currentColor" stroke-width="1.5"></circle>
                <circle cx="8.5" cy="9" r="1.3"></circle>
                <circle cx="14.5" cy="8" r="1"></circle>
                <circle cx="15" cy="14.5" r="1.4"></circle>
                <circle cx="9.5" cy="15" r="1"></circle>
            </svg>
        </button>
        <Show when=modal>
            <CookieSettingsModal/>
        </Show>
    }
}
