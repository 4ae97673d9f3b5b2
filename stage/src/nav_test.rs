use super::*;

fn clamp() -> Carousel {
    Carousel::new(&NavigationConfig::default())
}

fn looped() -> Carousel {
    Carousel::new(&NavigationConfig { edge: EdgeMode::Loop, ..NavigationConfig::default() })
}

/// Start a transition at `now` and tick past its completion.
fn settle(c: &mut Carousel, now: f64) -> f64 {
    let done = now + c.transition_ms();
    c.tick(done);
    c.tick(done + 16.0);
    done + 16.0
}

// =============================================================
// Clamp mode
// =============================================================

#[test]
fn starts_at_home_unlocked() {
    let c = clamp();
    assert_eq!(c.active_section(), SectionId::Home);
    assert!(!c.is_transitioning());
    assert_eq!(c.track_offset_percent(), 0.0);
}

#[test]
fn go_to_locks_and_completion_unlocks() {
    let mut c = clamp();
    let outcome = c.go_to(SectionId::Portfolio.into(), 0.0);
    assert_eq!(outcome, NavOutcome::Started { from: SectionId::Home, to: SectionId::Portfolio });
    assert!(c.is_transitioning());
    assert_eq!(c.active_section(), SectionId::Portfolio);

    assert!(c.tick(1199.0).is_empty());
    assert!(c.is_transitioning());
    assert_eq!(c.tick(1200.0), vec![NavEvent::TransitionFinished { active: SectionId::Portfolio }]);
    assert!(!c.is_transitioning());
}

#[test]
fn requests_during_transition_are_dropped_not_queued() {
    let mut c = clamp();
    assert!(c.go_to(NavTarget::Index(1), 0.0).is_started());
    for (i, t) in [10.0, 20.0, 30.0].into_iter().enumerate() {
        let outcome = c.go_to(NavTarget::Index(i + 2), t);
        assert_eq!(outcome, NavOutcome::Rejected(Rejection::Transitioning));
    }
    c.tick(1200.0);
    assert_eq!(c.active_section(), SectionId::Services);
    assert!(!c.is_transitioning());
}

#[test]
fn go_to_current_section_is_a_no_op() {
    let mut c = clamp();
    assert_eq!(c.go_to(SectionId::Home.into(), 0.0), NavOutcome::Rejected(Rejection::AlreadyThere));
    assert!(!c.is_transitioning());
}

#[test]
fn out_of_range_index_clamps_to_last() {
    let mut c = clamp();
    c.go_to(NavTarget::Index(42), 0.0);
    assert_eq!(c.active_section(), SectionId::About);
}

#[test]
fn section_outside_carousel_is_unknown() {
    let config = NavigationConfig::default();
    let mut c = Carousel::with_sections(vec![SectionId::Home, SectionId::Services], &config);
    assert_eq!(c.go_to(SectionId::About.into(), 0.0), NavOutcome::Rejected(Rejection::UnknownTarget));
}

#[test]
fn next_and_previous_stop_at_the_ends() {
    let mut c = clamp();
    assert_eq!(c.previous(0.0), NavOutcome::Rejected(Rejection::AtEdge));
    assert!(c.at_start());

    c.go_to(NavTarget::Index(4), 0.0);
    let now = settle(&mut c, 0.0);
    assert!(c.at_end());
    assert_eq!(c.next(now), NavOutcome::Rejected(Rejection::AtEdge));
    assert!(c.previous(now).is_started());
    assert_eq!(c.active_section(), SectionId::Contact);
}

#[test]
fn end_key_jumps_straight_to_last_section() {
    let mut c = clamp();
    let outcome = c.apply(NavInput::Last, 0.0);
    assert_eq!(outcome, NavOutcome::Started { from: SectionId::Home, to: SectionId::About });
    assert!(c.is_transitioning());
    assert_eq!(c.tick(1200.0), vec![NavEvent::TransitionFinished { active: SectionId::About }]);
    assert!(!c.is_transitioning());
}

#[test]
fn track_offset_steps_by_one_panel() {
    let mut c = clamp();
    c.go_to(NavTarget::Index(2), 0.0);
    assert!((c.track_offset_percent() - 40.0).abs() < 1e-9);
}

#[test]
fn teardown_cancels_pending_completion() {
    let mut c = clamp();
    c.go_to(NavTarget::Index(1), 0.0);
    c.teardown();
    assert!(!c.is_transitioning());
    assert!(c.tick(5000.0).is_empty());
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn reset_returns_to_home() {
    let mut c = clamp();
    c.go_to(NavTarget::Index(3), 0.0);
    c.reset();
    assert_eq!(c.active_section(), SectionId::Home);
    assert!(!c.is_transitioning());
}

// =============================================================
// Loop mode
// =============================================================

#[test]
fn loop_track_has_clone_slots_at_both_ends() {
    let c = looped();
    let slots = c.slots();
    assert_eq!(slots.len(), 7);
    assert_eq!(slots[0], SectionDescriptor::clone_of(SectionId::About));
    assert_eq!(slots[6], SectionDescriptor::clone_of(SectionId::Home));
    assert_eq!(c.slot(), 1);
    assert_eq!(c.active_section(), SectionId::Home);
}

#[test]
fn loop_previous_from_first_wraps_through_leading_clone() {
    let mut c = looped();
    let outcome = c.previous(0.0);
    assert_eq!(outcome, NavOutcome::Started { from: SectionId::Home, to: SectionId::About });
    assert_eq!(c.slot(), 0);

    let events = c.tick(1200.0);
    assert_eq!(
        events,
        vec![
            NavEvent::Snapped { active: SectionId::About },
            NavEvent::TransitionFinished { active: SectionId::About },
        ]
    );
    assert_eq!(c.slot(), 5);
    assert!(!c.animates());
}

#[test]
fn loop_snap_blocks_input_for_one_tick() {
    let mut c = looped();
    c.previous(0.0);
    c.tick(1200.0);
    assert!(c.is_settling());
    assert_eq!(c.next(1201.0), NavOutcome::Rejected(Rejection::Settling));

    assert_eq!(c.tick(1216.0), vec![NavEvent::Settled]);
    assert!(c.animates());
    assert!(c.next(1217.0).is_started());
}

#[test]
fn loop_out_of_range_index_wraps() {
    let mut c = looped();
    c.go_to(NavTarget::Index(7), 0.0);
    assert_eq!(c.active_section(), SectionId::Portfolio);
}

#[test]
fn loop_forward_cycle_never_surfaces_a_clone() {
    let mut c = looped();
    let mut now = 0.0;
    let mut seen = Vec::new();
    for _ in 0..11 {
        assert!(c.next(now).is_started());
        seen.push(c.active_section());
        now = settle(&mut c, now);
        seen.push(c.active_section());
    }
    let expected_cycle = [
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Contact,
        SectionId::About,
        SectionId::Home,
    ];
    for (i, pair) in seen.chunks(2).enumerate() {
        assert_eq!(pair[0], expected_cycle[i % 5]);
        assert_eq!(pair[1], expected_cycle[i % 5]);
    }
    assert!((1..=5).contains(&c.slot()));
}

#[test]
fn loop_teardown_mid_wrap_lands_on_real_slot() {
    let mut c = looped();
    c.previous(0.0);
    c.teardown();
    assert_eq!(c.slot(), 5);
    assert!(c.previous(10.0).is_started());
}
