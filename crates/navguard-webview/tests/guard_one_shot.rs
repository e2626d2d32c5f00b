#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use navguard_core::{NavigationEvent, PlatformMode};
use navguard_webview::policy::OneShotLatch;
use navguard_webview::{
    DenyReason, LatchState, NavigationDecision, NavigationGuard, RecordingReporter,
};

fn ev(url: &str) -> NavigationEvent {
    NavigationEvent::from_url(url)
}

fn quiet(base: &str, mode: PlatformMode) -> NavigationGuard {
    NavigationGuard::new(base, mode)
        .unwrap()
        .with_reporter(Arc::new(RecordingReporter::new()))
}

#[test]
fn fresh_guard_allows_first_matching_load_only() {
    let g = quiet("./webview", PlatformMode::ReportsInitialLoad);
    assert_eq!(g.state(), LatchState::Fresh);
    assert_eq!(g.base_url_tail(), "webview");

    assert!(g.decide(&ev("file:///app/bundle/webview")));
    assert_eq!(g.state(), LatchState::Consumed);

    assert!(!g.decide(&ev("file:///app/bundle/webview")));
    assert!(!g.decide(&ev("file:///other/webview")));
    assert_eq!(g.state(), LatchState::Consumed);
}

#[test]
fn repeated_denials_never_consume() {
    let g = quiet("./webview", PlatformMode::ReportsInitialLoad);
    for _ in 0..5 {
        assert_eq!(
            g.evaluate(&ev("file:///app/bundle/notwebview.html")),
            NavigationDecision::Deny(DenyReason::SuffixMismatch)
        );
        assert_eq!(g.state(), LatchState::Fresh);
    }
    assert!(g.decide(&ev("file:///app/bundle/webview")));
}

#[test]
fn skips_initial_load_mode_never_transitions() {
    let g = quiet(
        "file:///android_asset/webview/editHistory.html",
        PlatformMode::SkipsInitialLoad,
    );
    for url in [
        "file:///android_asset/webview/editHistory.html",
        "file:///android_asset/webview",
        "about:blank",
    ] {
        assert!(!g.decide(&ev(url)));
        assert_eq!(g.state(), LatchState::Fresh);
    }
}

#[test]
fn only_one_pass_under_interleaving() {
    let g = quiet("./webview/editHistory.html", PlatformMode::ReportsInitialLoad);
    let urls = [
        "https://evil.example/webview/editHistory.html",
        "file:///a/webview/editHistory.html?q",
        "file:///a/webview/editHistory.html",
        "file:///b/webview/editHistory.html",
        "file:///a/webview/editHistory.html",
    ];
    let allowed = urls.iter().filter(|u| g.decide(&ev(u))).count();
    assert_eq!(allowed, 1);
}

#[test]
fn concurrent_callers_see_a_single_winner() {
    let g = Arc::new(quiet("./webview", PlatformMode::ReportsInitialLoad));
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let g = Arc::clone(&g);
            thread::spawn(move || g.decide(&ev(&format!("file:///bundle-{i}/webview"))))
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|allowed| *allowed)
        .count();
    assert_eq!(wins, 1);
    assert_eq!(g.state(), LatchState::Consumed);
}

#[test]
fn latch_is_terminal() {
    let latch = OneShotLatch::new();
    assert_eq!(latch.state(), LatchState::Fresh);
    assert!(latch.try_consume());
    assert!(!latch.try_consume());
    assert!(!latch.try_consume());
    assert_eq!(latch.state(), LatchState::Consumed);
}

#[test]
fn empty_or_tailless_locator_fails_fast() {
    for bad in ["", "./"] {
        let err = NavigationGuard::new(bad, PlatformMode::ReportsInitialLoad).unwrap_err();
        assert_eq!(err.code().as_str(), "INVALID_BASE_LOCATOR", "locator={bad:?}");
    }
    // Only one leading "./" is stripped.
    let g = quiet("././webview", PlatformMode::ReportsInitialLoad);
    assert_eq!(g.base_url_tail(), "./webview");
}

#[test]
fn url_only_handler_keeps_one_shot() {
    let handler = quiet("./webview", PlatformMode::ReportsInitialLoad).into_handler();
    assert!(!handler("https://example.com/webview".to_string()));
    assert!(handler("file:///app/webview".to_string()));
    assert!(!handler("file:///app/webview".to_string()));
}
