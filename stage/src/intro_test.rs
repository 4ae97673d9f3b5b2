use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const FRAME: f64 = 16.0;

fn sequencer() -> IntroSequencer {
    IntroSequencer::new(&StageConfig::default())
}

/// Tick every frame from `from` to `to` inclusive, dropping `TextFrame` noise.
fn run(seq: &mut IntroSequencer, from: f64, to: f64) -> Vec<(f64, IntroEvent)> {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut out = Vec::new();
    let mut t = from;
    while t <= to {
        for e in seq.tick(t, &mut rng) {
            if e != IntroEvent::TextFrame {
                out.push((t, e));
            }
        }
        t += FRAME;
    }
    out
}

fn time_of(events: &[(f64, IntroEvent)], wanted: IntroEvent) -> f64 {
    events.iter().find(|(_, e)| *e == wanted).map(|(t, _)| *t).expect("event present")
}

// =============================================================
// Full run
// =============================================================

#[test]
fn phases_advance_in_order_and_complete_once() {
    let mut seq = sequencer();
    seq.start(0.0);
    let events = run(&mut seq, 0.0, 20_000.0);

    let phases: Vec<IntroPhase> = events
        .iter()
        .filter_map(|(_, e)| match e {
            IntroEvent::Phase(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(
        phases,
        vec![
            IntroPhase::NamesVisible,
            IntroPhase::Retracting,
            IntroPhase::Scrambling,
            IntroPhase::FinalDisplay,
            IntroPhase::Exiting,
            IntroPhase::Done,
        ]
    );
    assert_eq!(events.iter().filter(|(_, e)| *e == IntroEvent::Completed).count(), 1);
    assert!(seq.is_done());
    assert!(!seq.is_active());
}

#[test]
fn head_cues_follow_mount_offsets() {
    let mut seq = sequencer();
    seq.start(500.0);
    let events = run(&mut seq, 500.0, 6_000.0);
    assert!(time_of(&events, IntroEvent::Phase(IntroPhase::NamesVisible)) >= 1_500.0);
    assert!(time_of(&events, IntroEvent::CaptionShown) >= 1_600.0);
    assert!(time_of(&events, IntroEvent::Phase(IntroPhase::Retracting)) >= 3_750.0);
    assert!(time_of(&events, IntroEvent::Phase(IntroPhase::Scrambling)) >= 4_250.0);
}

#[test]
fn glow_follows_scramble_completion() {
    let mut seq = sequencer();
    seq.start(0.0);
    let events = run(&mut seq, 0.0, 20_000.0);

    let final_at = time_of(&events, IntroEvent::Phase(IntroPhase::FinalDisplay));
    let soft_at = time_of(&events, IntroEvent::Glow(GlowLevel::Soft));
    let power_at = time_of(&events, IntroEvent::Glow(GlowLevel::Power));
    let steady_at = time_of(&events, IntroEvent::Glow(GlowLevel::Steady));
    let exit_at = time_of(&events, IntroEvent::Phase(IntroPhase::Exiting));
    let done_at = time_of(&events, IntroEvent::Completed);

    assert_eq!(soft_at, final_at);
    assert!(power_at >= final_at + 200.0);
    assert!(steady_at >= power_at + 200.0 - FRAME);
    assert!(exit_at >= steady_at + 4_000.0 - FRAME);
    assert!(done_at >= exit_at + 900.0 - FRAME);
}

#[test]
fn slow_scramble_delays_the_tail() {
    let mut config = StageConfig::default();
    config.scramble.intro_duration_ms = 3_000.0;
    let mut seq = IntroSequencer::new(&config);
    seq.start(0.0);
    let events = run(&mut seq, 0.0, 30_000.0);

    let final_at = time_of(&events, IntroEvent::Phase(IntroPhase::FinalDisplay));
    assert!(final_at >= 3_750.0 + 3_000.0);
    assert!(time_of(&events, IntroEvent::Glow(GlowLevel::Power)) > final_at);
}

// =============================================================
// View snapshot
// =============================================================

#[test]
fn idle_view_shows_nothing() {
    let seq = sequencer();
    let view = seq.view();
    assert_eq!(view.phase, IntroPhase::Idle);
    assert!(!view.elements_visible);
    assert_eq!(view.caption, None);
    assert_eq!(view.glow, None);
}

#[test]
fn retraction_blurs_the_name() {
    let mut seq = sequencer();
    seq.start(0.0);
    run(&mut seq, 0.0, 3_300.0);
    let view = seq.view();
    assert_eq!(view.phase, IntroPhase::Retracting);
    assert!(view.blur);
    assert!(view.name_retracted);
    assert_eq!(view.title, "Web Dev.");
    assert_eq!(view.caption.as_deref(), Some(consts::INTRO_CAPTION_START));
}

#[test]
fn final_display_shows_end_texts_unblurred() {
    let mut seq = sequencer();
    seq.start(0.0);
    let events = run(&mut seq, 0.0, 5_000.0);
    assert!(events.iter().any(|(_, e)| *e == IntroEvent::Phase(IntroPhase::FinalDisplay)));

    let view = seq.view();
    assert_eq!(view.title, "JT Lab");
    assert_eq!(view.caption.as_deref(), Some(consts::INTRO_CAPTION_END));
    assert!(view.name_hidden);
    assert!(!view.blur);
    assert!(!view.exiting);
}

#[test]
fn late_hide_name_cue_is_forced_at_final_display() {
    let mut config = StageConfig::default();
    config.intro.hide_name_ms = 9_000.0;
    let mut seq = IntroSequencer::new(&config);
    seq.start(0.0);
    let events = run(&mut seq, 0.0, 20_000.0);

    let hidden: Vec<f64> =
        events.iter().filter(|(_, e)| *e == IntroEvent::NameHidden).map(|(t, _)| *t).collect();
    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden[0], time_of(&events, IntroEvent::Phase(IntroPhase::FinalDisplay)));
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn nothing_happens_before_start() {
    let mut seq = sequencer();
    assert!(run(&mut seq, 0.0, 10_000.0).is_empty());
    assert_eq!(seq.phase(), IntroPhase::Idle);
}

#[test]
fn second_start_does_not_reschedule() {
    let mut seq = sequencer();
    seq.start(0.0);
    seq.start(5_000.0);
    let events = run(&mut seq, 0.0, 1_100.0);
    assert_eq!(time_of(&events, IntroEvent::Phase(IntroPhase::NamesVisible)), 1_008.0);
}

#[test]
fn teardown_stops_every_pending_cue() {
    let mut seq = sequencer();
    seq.start(0.0);
    run(&mut seq, 0.0, 4_000.0);
    assert_eq!(seq.phase(), IntroPhase::Scrambling);

    seq.teardown();
    assert!(run(&mut seq, 4_016.0, 30_000.0).is_empty());
    assert_eq!(seq.phase(), IntroPhase::Scrambling);
    assert_eq!(seq.next_deadline(), None);
}

#[test]
fn ticks_after_done_emit_nothing() {
    let mut seq = sequencer();
    seq.start(0.0);
    run(&mut seq, 0.0, 20_000.0);
    assert!(run(&mut seq, 20_016.0, 25_000.0).is_empty());
}
