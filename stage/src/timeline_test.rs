use super::*;

#[derive(Clone, Debug, PartialEq)]
enum Cue {
    A,
    B,
    C,
}

fn drain(timeline: &mut Timeline<Cue>, now: f64) -> Vec<Cue> {
    let mut out = Vec::new();
    while let Some((cue, _)) = timeline.pop_due(now) {
        out.push(cue);
    }
    out
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn pop_due_returns_cues_in_deadline_order() {
    let mut t = Timeline::new();
    t.schedule(Cue::C, 300.0);
    t.schedule(Cue::A, 100.0);
    t.schedule(Cue::B, 200.0);
    assert_eq!(drain(&mut t, 1000.0), vec![Cue::A, Cue::B, Cue::C]);
    assert!(t.is_empty());
}

#[test]
fn equal_deadlines_fire_in_scheduling_order() {
    let mut t = Timeline::new();
    t.schedule(Cue::B, 100.0);
    t.schedule(Cue::A, 100.0);
    assert_eq!(drain(&mut t, 100.0), vec![Cue::B, Cue::A]);
}

#[test]
fn pop_due_leaves_future_cues_pending() {
    let mut t = Timeline::new();
    t.schedule(Cue::A, 100.0);
    t.schedule(Cue::B, 500.0);
    assert_eq!(drain(&mut t, 250.0), vec![Cue::A]);
    assert_eq!(t.len(), 1);
    assert_eq!(t.next_deadline(), Some(500.0));
}

#[test]
fn pop_due_reports_the_cue_deadline_not_now() {
    let mut t = Timeline::new();
    t.schedule(Cue::A, 120.0);
    assert_eq!(t.pop_due(900.0), Some((Cue::A, 120.0)));
}

// =============================================================
// Rescheduling and cancellation
// =============================================================

#[test]
fn rescheduling_a_key_moves_it() {
    let mut t = Timeline::new();
    t.schedule(Cue::A, 100.0);
    t.schedule(Cue::A, 400.0);
    assert_eq!(t.len(), 1);
    assert!(t.pop_due(200.0).is_none());
    assert_eq!(t.pop_due(400.0), Some((Cue::A, 400.0)));
}

#[test]
fn cancel_removes_only_that_key() {
    let mut t = Timeline::new();
    t.schedule(Cue::A, 100.0);
    t.schedule(Cue::B, 100.0);
    assert!(t.cancel(&Cue::A));
    assert!(!t.cancel(&Cue::A));
    assert!(!t.is_scheduled(&Cue::A));
    assert!(t.is_scheduled(&Cue::B));
}

#[test]
fn cancel_all_prevents_any_late_cue() {
    let mut t = Timeline::new();
    t.schedule(Cue::A, 100.0);
    t.schedule(Cue::B, 200.0);
    t.cancel_all();
    assert!(t.pop_due(f64::MAX).is_none());
    assert_eq!(t.next_deadline(), None);
}
