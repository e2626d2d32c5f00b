//! Guard decision vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use navguard_webview::{LatchState, NavigationGuard, RecordingReporter};


#[test]
fn guard_vectors() {
    let files = [
        "reports_first_load_ok.json",
        "reports_query_rejected.json",
        "reports_wrong_scheme.json",
        "reports_suffix_mismatch.json",
        "skips_always_denies.json",
    ];

    for f in files {
        let v = vector_loader::load(f);
        let reporter = Arc::new(RecordingReporter::new());
        let guard = NavigationGuard::new(v.base_locator.clone(), v.mode)
            .unwrap()
            .with_reporter(reporter.clone());

        let mut denials = 0;
        for (i, step) in v.steps.iter().enumerate() {
            let d = guard.evaluate(&step.event);
            assert_eq!(d.is_allowed(), step.expect.allowed, "vector={} step={i}", v.description);
            assert_eq!(
                d.deny_reason().map(|r| r.as_str().to_string()),
                step.expect.reason,
                "vector={} step={i}",
                v.description
            );
            if !d.is_allowed() {
                denials += 1;
            }
            assert_eq!(reporter.len(), denials, "vector={} step={i}", v.description);
        }

        let allowed = v.steps.iter().filter(|s| s.expect.allowed).count();
        let expected_state = if allowed == 0 { LatchState::Fresh } else { LatchState::Consumed };
        assert_eq!(guard.state(), expected_state, "vector={}", v.description);
    }
}
