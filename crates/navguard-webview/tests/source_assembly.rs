#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use navguard_core::{NavigationEvent, Platform};
use navguard_webview::source::origin_allowed;
use navguard_webview::{config, EmbeddedSource, LatchState, RecordingReporter};

#[test]
fn page_lands_under_platform_assets_base() {
    let ios = EmbeddedSource::for_page(Platform::Ios, "editHistory.html", "<p>hi</p>").unwrap();
    assert_eq!(ios.base_url, "./webview/editHistory.html");
    assert_eq!(ios.html, "<p>hi</p>");

    let android = EmbeddedSource::for_page(Platform::Android, "/editHistory.html", "").unwrap();
    assert_eq!(android.base_url, "file:///android_asset/webview/editHistory.html");

    assert!(EmbeddedSource::for_page(Platform::Ios, "", "").is_err());
}

#[test]
fn source_guard_accepts_host_resolved_ios_load() {
    let src = EmbeddedSource::for_page(Platform::Ios, "editHistory.html", "").unwrap();
    let g = src
        .guard(Platform::Ios.mode())
        .unwrap()
        .with_reporter(Arc::new(RecordingReporter::new()));

    let resolved = "file:///private/var/containers/Bundle/Application/9C1E/App.app/webview/editHistory.html";
    assert!(g.decide(&NavigationEvent::from_url(resolved)));
    assert_eq!(g.state(), LatchState::Consumed);
}

#[test]
fn source_guard_on_android_denies_everything() {
    let src = EmbeddedSource::for_page(Platform::Android, "editHistory.html", "").unwrap();
    let g = src
        .guard(Platform::Android.mode())
        .unwrap()
        .with_reporter(Arc::new(RecordingReporter::new()));
    assert!(!g.decide(&NavigationEvent::from_url(src.base_url.clone())));
}

#[test]
fn config_surface_builds_source() {
    let cfg = config::load_from_str(
        "version: 1\nplatform: ios\nsurfaces: [{ id: edit-history, page: editHistory.html }]\n",
    )
    .unwrap();
    let src = cfg
        .surface("edit-history")
        .unwrap()
        .source(cfg.platform, "<html></html>")
        .unwrap();
    assert_eq!(src.base_url, "./webview/editHistory.html");
}

#[test]
fn origin_whitelist_is_file_only() {
    assert!(origin_allowed("file:///android_asset/webview/editHistory.html"));
    assert!(!origin_allowed("https://example.com/"));
    assert!(!origin_allowed("data:text/html,<p>"));
}
