use super::*;

fn flow() -> PageFlow {
    PageFlow::new(&RevealConfig::default())
}

#[test]
fn starts_on_intro() {
    let page = flow();
    assert!(page.shows_intro());
    assert!(!page.curtain_visible());
    assert!(!page.is_revealed());
}

#[test]
fn curtain_holds_then_fades_then_reveals() {
    let mut page = flow();
    assert_eq!(page.intro_completed(1_000.0), Some(PageEvent::CurtainUp));
    assert_eq!(page.state(), PageState::Curtain);

    assert!(page.tick(1_199.0).is_empty());
    assert_eq!(page.tick(1_200.0), vec![PageEvent::FadeStarted]);
    assert_eq!(page.state(), PageState::Fading);
    assert!(page.curtain_visible());

    assert!(page.tick(1_999.0).is_empty());
    assert_eq!(page.tick(2_000.0), vec![PageEvent::Revealed]);
    assert!(page.is_revealed());
    assert!(!page.curtain_visible());
}

#[test]
fn late_tick_fires_both_cues_in_order() {
    let mut page = flow();
    page.intro_completed(0.0);
    assert_eq!(page.tick(10_000.0), vec![PageEvent::FadeStarted, PageEvent::Revealed]);
}

#[test]
fn duplicate_completion_reveals_once() {
    let mut page = flow();
    page.intro_completed(0.0);
    assert_eq!(page.intro_completed(50.0), None);
    let revealed: usize = [500.0, 1_000.0, 1_500.0, 5_000.0]
        .into_iter()
        .map(|t| page.tick(t).into_iter().filter(|e| *e == PageEvent::Revealed).count())
        .sum();
    assert_eq!(revealed, 1);
    assert_eq!(page.intro_completed(6_000.0), None);
}

#[test]
fn teardown_freezes_the_curtain() {
    let mut page = flow();
    page.intro_completed(0.0);
    page.teardown();
    assert!(page.tick(10_000.0).is_empty());
    assert_eq!(page.state(), PageState::Curtain);
    assert!(!page.curtain_visible());
    assert_eq!(page.intro_completed(10_000.0), None);
}
