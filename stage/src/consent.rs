//! Cookie consent record and the banner/icon/modal flow.
//!
//! DESIGN
//! ======
//!
//! The persisted [`ConsentRecord`] is the only source of truth for what the
//! visitor agreed to. [`ConsentFlow`] is a small view state machine:
//!
//! ```text
//! Hidden --reveal--> Banner (no record) | Icon (record exists)
//! Banner | Icon --open_settings--> Modal { draft from stored record }
//! Modal --close_settings--> back to where it was opened from
//! Banner | Modal --accept_all | reject_all | save_custom--> Icon
//! ```
//!
//! Decisions always overwrite the stored record; nothing is merged. A failed
//! write is logged and the flow still moves to `Icon`, so the visitor is not
//! nagged again this session.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::consts::COOKIE_CONSENT_KEY;
use crate::prefs::{PreferenceStore, PrefsError};

/// Cookie category shown in the settings modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentCategory {
    Necessary,
    Functional,
    Analytics,
    Marketing,
}

impl ConsentCategory {
    pub const ALL: [ConsentCategory; 4] = [
        ConsentCategory::Necessary,
        ConsentCategory::Functional,
        ConsentCategory::Analytics,
        ConsentCategory::Marketing,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Necessary => "Necessary Cookies",
            Self::Functional => "Functional Cookies",
            Self::Analytics => "Analytics Cookies",
            Self::Marketing => "Marketing Cookies",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Necessary => {
                "These cookies are necessary for the website to function properly and cannot be switched off. \
                 They are usually only set in response to actions made by you which amount to a request for \
                 services, such as setting your privacy preferences, logging in or filling in forms."
            }
            Self::Functional => {
                "These cookies enable the website to provide enhanced functionality and personalization. \
                 They may be set by us or by third party providers whose services we have added to our pages."
            }
            Self::Analytics => {
                "These cookies allow us to count visits and traffic sources so we can measure and improve the \
                 performance of our site. They help us to know which pages are the most and least popular and \
                 see how visitors move around the site."
            }
            Self::Marketing => {
                "These cookies may be set through our site by our advertising partners. They may be used by \
                 those companies to build a profile of your interests and show you relevant ads on other sites."
            }
        }
    }

    #[must_use]
    pub fn legal_basis(self) -> &'static str {
        match self {
            Self::Necessary => "Art. 6 (1)(f) GDPR",
            Self::Functional | Self::Analytics | Self::Marketing => "Art. 6 (1)(a) GDPR",
        }
    }

    #[must_use]
    pub fn recipients(self) -> Option<&'static str> {
        match self {
            Self::Analytics => Some("Google Analytics"),
            Self::Marketing => Some("Facebook, Google"),
            Self::Necessary | Self::Functional => None,
        }
    }

    #[must_use]
    pub fn storage_period(self) -> &'static str {
        match self {
            Self::Necessary => "Session - 1 Year",
            Self::Functional | Self::Marketing => "1 Year",
            Self::Analytics => "2 Years",
        }
    }

    /// Only the necessary category is fixed on.
    #[must_use]
    pub fn is_editable(self) -> bool {
        self != Self::Necessary
    }
}

/// The user-editable part of a consent decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsentChoices {
    pub functional: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl ConsentChoices {
    #[must_use]
    pub fn all() -> Self {
        Self { functional: true, analytics: true, marketing: true }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether `category` is allowed. Necessary is always allowed.
    #[must_use]
    pub fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Functional => self.functional,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// Flip `category`. Necessary cannot be toggled.
    pub fn toggle(&mut self, category: ConsentCategory) {
        match category {
            ConsentCategory::Necessary => {}
            ConsentCategory::Functional => self.functional = !self.functional,
            ConsentCategory::Analytics => self.analytics = !self.analytics,
            ConsentCategory::Marketing => self.marketing = !self.marketing,
        }
    }
}

/// Persisted consent decision, stored as JSON under `cookieConsent`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub necessary: bool,
    #[serde(default)]
    pub functional: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl ConsentRecord {
    #[must_use]
    pub fn new(choices: ConsentChoices, timestamp: OffsetDateTime) -> Self {
        Self {
            necessary: true,
            functional: choices.functional,
            analytics: choices.analytics,
            marketing: choices.marketing,
            timestamp,
        }
    }

    #[must_use]
    pub fn choices(&self) -> ConsentChoices {
        ConsentChoices { functional: self.functional, analytics: self.analytics, marketing: self.marketing }
    }

    /// Parse a stored record. Records with `necessary: false` are invalid.
    pub fn from_json(raw: &str) -> Result<Self, PrefsError> {
        let record: Self = serde_json::from_str(raw).map_err(|e| malformed(e.to_string()))?;
        if !record.necessary {
            return Err(malformed("`necessary` must be true".to_owned()));
        }
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String, PrefsError> {
        serde_json::to_string(self).map_err(|e| malformed(e.to_string()))
    }

    /// Read the stored record. Anything unreadable counts as "no consent yet".
    pub fn load<S: PreferenceStore>(store: &S) -> Option<Self> {
        let raw = match store.get(COOKIE_CONSENT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("consent: {e}; treating as no consent");
                return None;
            }
        };
        match Self::from_json(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("consent: {e}; treating as no consent");
                None
            }
        }
    }

    /// Overwrite the stored record.
    pub fn save<S: PreferenceStore>(&self, store: &mut S) -> Result<(), PrefsError> {
        store.set(COOKIE_CONSENT_KEY, &self.to_json()?)
    }
}

fn malformed(reason: String) -> PrefsError {
    PrefsError::Malformed { key: COOKIE_CONSENT_KEY.to_owned(), reason }
}

/// Non-modal surface a settings modal returns to when closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentSurface {
    Banner,
    Icon,
}

/// What the consent UI currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentView {
    /// Main content is not revealed yet.
    Hidden,
    Banner,
    Icon,
    Modal { draft: ConsentChoices, return_to: ConsentSurface },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Decision {
    AcceptAll,
    RejectAll,
    Custom(ConsentChoices),
}

/// Consent view state machine; see the module docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentFlow {
    view: ConsentView,
}

impl Default for ConsentFlow {
    fn default() -> Self {
        Self { view: ConsentView::Hidden }
    }
}

impl ConsentFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> ConsentView {
        self.view
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        matches!(self.view, ConsentView::Modal { .. })
    }

    /// Show the banner or the settings icon, depending on whether a valid
    /// record is stored. Only acts while hidden.
    pub fn reveal<S: PreferenceStore>(&mut self, store: &S) {
        if self.view != ConsentView::Hidden {
            return;
        }
        self.view = if ConsentRecord::load(store).is_some() { ConsentView::Icon } else { ConsentView::Banner };
        log::debug!("consent: revealed as {:?}", self.view);
    }

    /// Open the settings modal with toggles from the stored record.
    pub fn open_settings<S: PreferenceStore>(&mut self, store: &S) {
        let return_to = match self.view {
            ConsentView::Banner => ConsentSurface::Banner,
            ConsentView::Icon => ConsentSurface::Icon,
            ConsentView::Hidden | ConsentView::Modal { .. } => return,
        };
        let draft = ConsentRecord::load(store).map(|r| r.choices()).unwrap_or_default();
        self.view = ConsentView::Modal { draft, return_to };
    }

    /// Flip one category in the open modal's draft.
    pub fn toggle(&mut self, category: ConsentCategory) {
        if let ConsentView::Modal { draft, .. } = &mut self.view {
            draft.toggle(category);
        }
    }

    /// Close the modal without writing anything.
    pub fn close_settings(&mut self) {
        if let ConsentView::Modal { return_to, .. } = self.view {
            self.view = match return_to {
                ConsentSurface::Banner => ConsentView::Banner,
                ConsentSurface::Icon => ConsentView::Icon,
            };
        }
    }

    /// Persist full consent. Returns the record written, or `None` when no
    /// decision surface is showing.
    pub fn accept_all<S: PreferenceStore>(&mut self, store: &mut S, now: OffsetDateTime) -> Option<ConsentRecord> {
        self.decide(Decision::AcceptAll, store, now)
    }

    /// Persist minimal consent (necessary only).
    pub fn reject_all<S: PreferenceStore>(&mut self, store: &mut S, now: OffsetDateTime) -> Option<ConsentRecord> {
        self.decide(Decision::RejectAll, store, now)
    }

    /// Persist the given choices.
    pub fn save_custom<S: PreferenceStore>(
        &mut self,
        choices: ConsentChoices,
        store: &mut S,
        now: OffsetDateTime,
    ) -> Option<ConsentRecord> {
        self.decide(Decision::Custom(choices), store, now)
    }

    /// Persist the open modal's draft.
    pub fn save_draft<S: PreferenceStore>(&mut self, store: &mut S, now: OffsetDateTime) -> Option<ConsentRecord> {
        match self.view {
            ConsentView::Modal { draft, .. } => self.decide(Decision::Custom(draft), store, now),
            _ => None,
        }
    }

    fn decide<S: PreferenceStore>(
        &mut self,
        decision: Decision,
        store: &mut S,
        now: OffsetDateTime,
    ) -> Option<ConsentRecord> {
        if !matches!(self.view, ConsentView::Banner | ConsentView::Modal { .. }) {
            return None;
        }
        let choices = match decision {
            Decision::AcceptAll => ConsentChoices::all(),
            Decision::RejectAll => ConsentChoices::none(),
            Decision::Custom(choices) => choices,
        };
        let record = ConsentRecord::new(choices, now);
        match record.save(store) {
            Ok(()) => log::debug!("consent: stored {decision:?}"),
            Err(e) => log::warn!("consent: {decision:?} not persisted: {e}"),
        }
        self.view = ConsentView::Icon;
        Some(record)
    }
}
