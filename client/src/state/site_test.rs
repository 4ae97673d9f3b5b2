#![cfg(not(feature = "csr"))]

use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use stage::page::PageState;
use stage::site::KeyOutcome;

#[test]
fn dispatch_reaches_the_engine() {
    let handle = SiteHandle::new(StageConfig::default(), 1);
    let dark = handle.dispatch(|site, _| {
        site.toggle_theme();
        site.is_dark()
    });
    assert_eq!(dark, Some(true));
    assert_eq!(handle.peek(ClientSite::is_dark), Some(true));
}

#[test]
fn mount_starts_on_the_intro() {
    let handle = SiteHandle::new(StageConfig::default(), 1);
    handle.mount();
    assert_eq!(handle.with(ClientSite::page_state), PageState::Intro);
    assert_eq!(handle.dispatch(|site, now| site.key("End", now)), Some(KeyOutcome::Ignored));
}

#[test]
fn teardown_is_idempotent() {
    let handle = SiteHandle::new(StageConfig::default(), 1);
    handle.mount();
    handle.teardown();
    handle.teardown();
    assert!(handle.peek(ClientSite::needs_frames).is_some());
}

#[test]
fn silent_dispatch_does_not_rerun_readers() {
    let handle = SiteHandle::new(StageConfig::default(), 1);
    let runs = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&runs);
    let dark = Memo::new(move |_| {
        counted.fetch_add(1, Ordering::SeqCst);
        handle.with(ClientSite::is_dark)
    });

    assert!(!dark.get());
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    assert!(handle.dispatch_silent(|site| site.touch_start(120.0)));
    assert!(handle.dispatch_silent(|site| site.touch_move(40.0)));
    assert!(!dark.get());
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    handle.dispatch(|site, _| site.toggle_theme());
    assert!(dark.get());
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}
