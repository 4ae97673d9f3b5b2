//! Static legal pages (Impressum, Datenschutz, Disclaimer).

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

use leptos::prelude::*;
use stage::prefs::PreferenceStore;
use stage::sections::LegalPage;
use stage::theme::ThemeState;

use crate::util::dark_mode;
use crate::util::storage::BrowserStore;

/// One numbered block of a legal page.
///
/// `en` is `None` for blocks that are the same in both languages
/// (addresses, registration numbers).
pub struct LegalBlock {
    pub heading: &'static str,
    pub de: &'static str,
    pub en: Option<&'static str>,
}

const IMPRESSUM: &[LegalBlock] = &[
    LegalBlock {
        heading: "1. Provider Identification / Anbieterkennzeichnung",
        de: "Andrew Julio (Einzelunternehmer), Invalidenstr. 104, 10117 Berlin",
        en: Some("Andrew Julio (sole proprietor), Invalidenstr. 104, 10117 Berlin"),
    },
    LegalBlock {
        heading: "2. Contact / Kontakt",
        de: "Telefon: +49 30 1234567, E-Mail: kontakt@andrewjulio.de",
        en: None,
    },
    LegalBlock {
        heading: "3. Commercial Register / Registereintrag",
        de: "Nicht eingetragen (Einzelunternehmer).",
        en: None,
    },
    LegalBlock {
        heading: "4. VAT ID / Umsatzsteuer-Identifikationsnummer",
        de: "USt-ID gem. § 27 a UStG: DE 123456789",
        en: None,
    },
    LegalBlock {
        heading: "5. Supervisory Authority / Aufsichtsbehörde",
        de: "Berliner Beauftragte für Datenschutz und Informationsfreiheit, Alt-Moabit 98, 10559 Berlin",
        en: None,
    },
    LegalBlock {
        heading: "6. Content Responsibility / Verantwortlich für den Inhalt",
        de: "Andrew Julio, Invalidenstr. 104, 10117 Berlin",
        en: None,
    },
    LegalBlock {
        heading: "7. Accessibility / Zugänglichkeit",
        de: "Das Impressum ist von jeder Seite aus mit maximal zwei Klicks erreichbar.",
        en: None,
    },
];

const DATENSCHUTZ: &[LegalBlock] = &[
    LegalBlock {
        heading: "1. Controller / Verantwortlicher",
        de: "Verantwortliche Stelle im Sinne der DSGVO ist Andrew Julio, Invalidenstr. 104, 10117 Berlin.",
        en: Some("Controller under the GDPR is Andrew Julio, Invalidenstr. 104, 10117 Berlin."),
    },
    LegalBlock {
        heading: "2. Data Protection Officer / Datenschutzbeauftragter",
        de: "Ein Datenschutzbeauftragter wird gemäß Art. 37 DSGVO nicht bestellt.",
        en: Some("No data protection officer has been appointed under Art. 37 GDPR."),
    },
    LegalBlock {
        heading: "3. Cookies & Local Storage / Cookies & lokaler Speicher",
        de: "Ihre Cookie-Einwilligung und Ihre Farbschema-Auswahl werden ausschließlich im lokalen Speicher Ihres Browsers abgelegt. Optionale Kategorien werden nur nach Einwilligung aktiviert.",
        en: Some("Your cookie consent and colour scheme choice are stored only in your browser's local storage. Optional categories are activated only with your consent."),
    },
    LegalBlock {
        heading: "4. Recipients / Empfänger",
        de: "Personen und Stellen, die IT-Dienstleistungen erbringen (z. B. Hosting-Provider), sowie Auftragsverarbeiter.",
        en: Some("IT service providers (e.g. hosting) and other processors."),
    },
    LegalBlock {
        heading: "5. International Transfers / Drittlandübermittlung",
        de: "Datenübermittlung in Länder außerhalb der EU/des EWR erfolgt nicht.",
        en: Some("No transfers outside the EU/EEA."),
    },
    LegalBlock {
        heading: "6. Retention Period / Speicherdauer",
        de: "Daten werden gelöscht, sobald sie für den genannten Zweck nicht mehr benötigt werden, spätestens nach gesetzlichen Aufbewahrungsfristen (z. B. 6 Monate für Log-Files).",
        en: Some("Data are erased once no longer needed, at the latest per statutory retention periods (e.g. 6 months for logs)."),
    },
    LegalBlock {
        heading: "7. Data Subject Rights / Rechte der Betroffenen",
        de: "Sie haben das Recht auf Auskunft, Berichtigung, Löschung, Einschränkung der Verarbeitung, Datenübertragbarkeit und Widerspruch nach Art. 15–22 DSGVO sowie Beschwerde bei der Aufsichtsbehörde (Berliner Beauftragte für Datenschutz und Informationsfreiheit).",
        en: Some("You have rights to access, rectify, erase, restrict processing, portability, and objection under Art. 15–22 GDPR, and to lodge a complaint with the Berlin Data Protection Authority."),
    },
    LegalBlock {
        heading: "8. Withdrawal & Complaints / Widerruf & Beschwerderecht",
        de: "Ein Widerruf erteilter Einwilligungen und eine Beschwerde bei der Aufsichtsbehörde sind jederzeit möglich.",
        en: Some("Consent may be withdrawn and a complaint lodged with the supervisory authority at any time."),
    },
];

const DISCLAIMER: &[LegalBlock] = &[
    LegalBlock {
        heading: "Haftungsausschluss / Disclaimer",
        de: "Die Inhalte dieser Webseite wurden mit größter Sorgfalt erstellt. Für die Richtigkeit, Vollständigkeit und Aktualität der Inhalte übernehmen wir jedoch keine Gewähr.",
        en: Some("The content on this website has been created with the utmost care. However, we assume no liability for the accuracy, completeness, or timeliness of the content."),
    },
    LegalBlock {
        heading: "Externe Links / External Links",
        de: "Diese Webseite enthält Verlinkungen zu externen Webseiten Dritter, auf deren Inhalte wir keinen Einfluss haben. Für die Inhalte der verlinkten Seiten ist allein der jeweilige Anbieter verantwortlich.",
        en: Some("This website contains links to external third-party websites over which we have no control. The respective providers are solely responsible for their content."),
    },
    LegalBlock {
        heading: "Urheberrecht / Copyright",
        de: "Sämtliche auf dieser Webseite verwendeten Texte, Bilder, Grafiken und sonstige Medien unterliegen dem Urheberrecht. Inhalte Dritter sind als solche gekennzeichnet, und bei Bekanntwerden von Urheberrechtsverletzungen werden wir diese Inhalte umgehend entfernen.",
        en: Some("All texts, images, graphics, and other media used on this website are subject to copyright. Third-party content is identified as such, and upon notification of copyright infringement, we will remove the offending content without delay."),
    },
    LegalBlock {
        heading: "Leistungsbeschreibung / Description of Services",
        de: "Alle Leistungen, Funktionen und dargestellten Beispiele dienen lediglich der Veranschaulichung und begründen keinerlei vertragliche Zusagen oder Garantien hinsichtlich Eignung oder Funktionalität.",
        en: Some("All services, features, and examples shown are for illustrative purposes only and do not constitute any contractual commitments or guarantees of suitability or functionality."),
    },
];

/// Content blocks for `page`.
pub fn blocks(page: LegalPage) -> &'static [LegalBlock] {
    match page {
        LegalPage::Impressum => IMPRESSUM,
        LegalPage::Datenschutz => DATENSCHUTZ,
        LegalPage::Disclaimer => DISCLAIMER,
    }
}

/// Page heading, e.g. "Legal Notice (Impressum)".
pub fn heading(page: LegalPage) -> String {
    match page {
        LegalPage::Impressum => format!("Legal Notice ({})", page.title()),
        LegalPage::Datenschutz => format!("Data Protection Notice ({})", page.title()),
        LegalPage::Disclaimer => format!("{} / Haftungsausschluss", page.title()),
    }
}

/// Theme for pages that run without the site engine.
fn stored_theme(store: &impl PreferenceStore) -> bool {
    ThemeState::load(store).is_dark()
}

#[component]
pub fn LegalPageView(page: LegalPage) -> impl IntoView {
    dark_mode::apply(stored_theme(&BrowserStore::new()));

    view! {
        <div class="legal" id=page.as_str()>
            <a class="legal__back" href="/">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                    <path d="M19 12H5M12 19l-7-7 7-7"></path>
                </svg>
                "Back"
            </a>
            <article class="legal__content">
                <h1 class="legal__title">{heading(page)}</h1>
                {blocks(page)
                    .iter()
                    .map(|block| {
                        view! {
                            <h2 class="legal__subtitle">{block.heading}</h2>
                            {match block.en {
                                Some(en) => {
                                    view! {
                                        <p><strong>"Deutsch:"</strong><br/>{block.de}</p>
                                        <p><strong>"English:"</strong><br/>{en}</p>
                                    }
                                        .into_any()
                                }
                                None => view! { <p>{block.de}</p> }.into_any(),
                            }}
                        }
                    })
                    .collect_view()}
                <p class="legal__note">
                    "Hinweis: Dieses Dokument dient als Muster und erhebt keinen Anspruch auf Rechtsberatung."
                </p>
            </article>
        </div>
    }
}
