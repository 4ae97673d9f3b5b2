use super::*;
use crate::prefs::MemoryStore;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2026-03-01 12:00:00 UTC);

fn stored(store: &MemoryStore) -> Option<ConsentRecord> {
    ConsentRecord::load(store)
}

fn revealed(store: &MemoryStore) -> ConsentFlow {
    let mut flow = ConsentFlow::new();
    flow.reveal(store);
    flow
}

// =============================================================
// Record parsing
// =============================================================

#[test]
fn record_parses_browser_iso_timestamp() {
    let raw = r#"{"necessary":true,"functional":true,"analytics":false,"marketing":false,"timestamp":"2024-05-01T10:20:30.123Z"}"#;
    let record = ConsentRecord::from_json(raw).expect("valid record");
    assert!(record.functional);
    assert!(!record.analytics);
    assert_eq!(record.timestamp.year(), 2024);
}

#[test]
fn record_with_necessary_false_is_rejected() {
    let raw = r#"{"necessary":false,"functional":true,"analytics":true,"marketing":true,"timestamp":"2024-05-01T10:20:30Z"}"#;
    assert!(matches!(ConsentRecord::from_json(raw), Err(PrefsError::Malformed { .. })));
}

#[test]
fn garbage_record_reads_as_no_consent() {
    let store = MemoryStore::new().with(COOKIE_CONSENT_KEY, "{not json");
    assert_eq!(stored(&store), None);
}

#[test]
fn record_serialises_rfc3339_timestamp() {
    let record = ConsentRecord::new(ConsentChoices::all(), NOW);
    let json = record.to_json().expect("serialise");
    assert!(json.contains(r#""timestamp":"2026-03-01T12:00:00Z""#), "{json}");
    assert!(json.contains(r#""necessary":true"#));
}

// =============================================================
// Choices
// =============================================================

#[test]
fn necessary_cannot_be_toggled_off() {
    let mut choices = ConsentChoices::none();
    choices.toggle(ConsentCategory::Necessary);
    assert!(choices.allows(ConsentCategory::Necessary));
    assert_eq!(choices, ConsentChoices::none());
    assert!(!ConsentCategory::Necessary.is_editable());
}

#[test]
fn categories_carry_modal_details() {
    assert_eq!(ConsentCategory::Necessary.legal_basis(), "Art. 6 (1)(f) GDPR");
    assert_eq!(ConsentCategory::Analytics.storage_period(), "2 Years");
    assert_eq!(ConsentCategory::Functional.recipients(), None);
}

// =============================================================
// Flow
// =============================================================

#[test]
fn hidden_until_revealed() {
    let mut store = MemoryStore::new();
    let mut flow = ConsentFlow::new();
    assert_eq!(flow.view(), ConsentView::Hidden);
    assert_eq!(flow.accept_all(&mut store, NOW), None);
    assert_eq!(stored(&store), None);
}

#[test]
fn no_record_reveals_banner_and_existing_record_reveals_icon() {
    let mut store = MemoryStore::new();
    assert_eq!(revealed(&store).view(), ConsentView::Banner);

    ConsentRecord::new(ConsentChoices::none(), NOW).save(&mut store).expect("save");
    assert_eq!(revealed(&store).view(), ConsentView::Icon);
}

#[test]
fn accept_all_persists_every_category() {
    let mut store = MemoryStore::new();
    let mut flow = revealed(&store);
    flow.accept_all(&mut store, NOW);
    let record = stored(&store).expect("record");
    assert!(record.necessary && record.functional && record.analytics && record.marketing);
    assert_eq!(record.timestamp, NOW);
    assert_eq!(flow.view(), ConsentView::Icon);
}

#[test]
fn reject_all_persists_only_necessary() {
    let mut store = MemoryStore::new();
    let mut flow = revealed(&store);
    flow.reject_all(&mut store, NOW);
    let record = stored(&store).expect("record");
    assert!(record.necessary);
    assert_eq!(record.choices(), ConsentChoices::none());
}

#[test]
fn modal_draft_starts_from_stored_record() {
    let mut store = MemoryStore::new();
    let choices = ConsentChoices { functional: false, analytics: true, marketing: false };
    ConsentRecord::new(choices, NOW).save(&mut store).expect("save");
    let mut flow = revealed(&store);

    flow.open_settings(&store);
    assert_eq!(flow.view(), ConsentView::Modal { draft: choices, return_to: ConsentSurface::Icon });
}

#[test]
fn reopened_modal_discards_unsaved_toggles() {
    let mut store = MemoryStore::new();
    let mut flow = revealed(&store);
    flow.open_settings(&store);
    flow.toggle(ConsentCategory::Marketing);
    flow.close_settings();
    flow.open_settings(&store);
    assert_eq!(flow.view(), ConsentView::Modal { draft: ConsentChoices::none(), return_to: ConsentSurface::Banner });
    assert_eq!(stored(&store), None);
    flow.accept_all(&mut store, NOW);
    assert!(stored(&store).is_some());
}

#[test]
fn closing_modal_returns_to_origin_without_writing() {
    let mut store = MemoryStore::new();
    let mut flow = revealed(&store);
    flow.open_settings(&store);
    flow.close_settings();
    assert_eq!(flow.view(), ConsentView::Banner);
    assert_eq!(store.peek(COOKIE_CONSENT_KEY), None);
}

#[test]
fn save_draft_overwrites_previous_record() {
    let mut store = MemoryStore::new();
    ConsentRecord::new(ConsentChoices::all(), NOW).save(&mut store).expect("save");
    let mut flow = revealed(&store);
    flow.open_settings(&store);
    flow.toggle(ConsentCategory::Functional);
    flow.toggle(ConsentCategory::Marketing);
    flow.save_draft(&mut store, NOW);
    let record = stored(&store).expect("record");
    assert_eq!(record.choices(), ConsentChoices { functional: false, analytics: true, marketing: false });
    assert_eq!(flow.view(), ConsentView::Icon);
}

#[test]
fn save_custom_forces_necessary() {
    let mut store = MemoryStore::new();
    let mut flow = revealed(&store);
    let record = flow
        .save_custom(ConsentChoices { functional: true, analytics: false, marketing: false }, &mut store, NOW)
        .expect("decision taken");
    assert!(record.necessary);
    assert!(stored(&store).is_some_and(|r| r.functional && !r.analytics));
}

#[test]
fn icon_cannot_decide_without_opening_settings() {
    let mut store = MemoryStore::new();
    ConsentRecord::new(ConsentChoices::none(), NOW).save(&mut store).expect("save");
    let mut flow = revealed(&store);
    assert_eq!(flow.accept_all(&mut store, NOW), None);
    assert_eq!(stored(&store).map(|r| r.choices()), Some(ConsentChoices::none()));
}

#[test]
fn failed_write_still_hides_banner() {
    let mut store = MemoryStore::new();
    let mut flow = revealed(&store);
    store.set_unavailable(true);
    assert!(flow.accept_all(&mut store, NOW).is_some());
    assert_eq!(flow.view(), ConsentView::Icon);
}
