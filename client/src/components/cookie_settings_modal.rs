//! Per-category consent settings.
//!
//! Edits a draft held by the engine; nothing is written until one of the
//! footer decisions. Closing (x, Cancel, overlay click or `Escape`) discards
//! the draft.

use leptos::prelude::*;
use stage::consent::{ConsentCategory, ConsentChoices, ConsentRecord, ConsentView};
use time::OffsetDateTime;

use crate::state::site::{ClientSite, SiteHandle};
use crate::util::clock;

fn draft_of(view: ConsentView) -> Option<ConsentChoices> {
    match view {
        ConsentView::Modal { draft, .. } => Some(draft),
        _ => None,
    }
}

#[component]
pub fn CookieSettingsModal() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let draft = Memo::new(move |_| site.with(|s| draft_of(s.consent_view())));

    let close = move || {
        site.dispatch(|s, _| s.close_consent_settings());
    };
    let decide = move |decision: fn(&mut ClientSite, OffsetDateTime) -> Option<ConsentRecord>| {
        if let Some(Some(record)) = site.dispatch(|s, _| decision(s, clock::now_utc())) {
            log::info!("consent: saved {:?}", record.choices());
        }
    };

    view! {
        <div class="cookie-modal__overlay" on:click=move |_| close()>
            <div
                class="cookie-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="cookie-modal-title"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="cookie-modal__header">
                    <h2 id="cookie-modal-title">"Cookie Settings"</h2>
                    <button class="cookie-modal__close" aria-label="Close" on:click=move |_| close()>
                        "×"
                    </button>
                </div>
                <div class="cookie-modal__body">
                    <p class="cookie-modal__description">
                        "We use cookies to enhance your browsing experience, analyze site traffic, and personalize content. You can choose which categories of cookies you allow. Necessary cookies are always active as they are necessary for the website to function properly."
                    </p>
                    {ConsentCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let checked = move || {
                                !category.is_editable()
                                    || draft.get().is_some_and(|d| d.allows(category))
                            };
                            view! {
                                <section class="cookie-modal__category">
                                    <label class="cookie-modal__toggle">
                                        <span class="cookie-modal__name">{category.label()}</span>
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            disabled=!category.is_editable()
                                            on:change=move |_| {
                                                site.dispatch(|s, _| s.toggle_consent(category));
                                            }
                                        />
                                    </label>
                                    <p class="cookie-modal__category-description">{category.description()}</p>
                                    <dl class="cookie-modal__details">
                                        <dt>"Legal Basis"</dt>
                                        <dd>{category.legal_basis()}</dd>
                                        {category
                                            .recipients()
                                            .map(|recipients| {
                                                view! {
                                                    <dt>"Recipients"</dt>
                                                    <dd>{recipients}</dd>
                                                }
                                            })}
                                        <dt>"Storage Period"</dt>
                                        <dd>{category.storage_period()}</dd>
                                    </dl>
                                </section>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="cookie-modal__footer">
                    <button class="button" on:click=move |_| decide(ClientSite::reject_all)>
                        "Reject All"
                    </button>
                    <div class="cookie-modal__footer-group">
                        <button class="button" on:click=move |_| close()>"Cancel"</button>
                        <button class="button button--secondary" on:click=move |_| decide(ClientSite::save_consent_settings)>
                            "Save Preferences"
                        </button>
                        <button class="button button--primary" on:click=move |_| decide(ClientSite::accept_all)>
                            "Accept All"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
