use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use navguard_core::error::{NavGuardError, Result};
use navguard_core::{NavigationEvent, PlatformMode};

use super::latch::{LatchState, OneShotLatch};
use super::rules::{base_url_tail, check_url};
use crate::obs::GuardMetrics;
use crate::report::{DenialRecord, DenialReporter, TracingReporter};

/// Why a navigation attempt was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The host never routes the legitimate first load here; anything that
    /// arrives is unexpected.
    InitialLoadNotRouted,
    /// The one-shot allowance was already spent.
    AlreadyLoaded,
    NotFileScheme,
    SuffixMismatch,
    /// URL carries `?` or `&`.
    QuerySyntax,
}

impl DenyReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenyReason::InitialLoadNotRouted => "initial_load_not_routed",
            DenyReason::AlreadyLoaded => "already_loaded",
            DenyReason::NotFileScheme => "not_file_scheme",
            DenyReason::SuffixMismatch => "suffix_mismatch",
            DenyReason::QuerySyntax => "query_syntax",
        }
    }
}

/// Decision from guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Deny(DenyReason),
}

impl NavigationDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, NavigationDecision::Allow)
    }

    pub fn deny_reason(self) -> Option<DenyReason> {
        match self {
            NavigationDecision::Allow => None,
            NavigationDecision::Deny(r) => Some(r),
        }
    }
}

/// Per-surface navigation guard.
/// Construct once per embedded content surface; never shared across surfaces.
pub struct NavigationGuard {
    base_locator: String,
    tail_start: usize,
    mode: PlatformMode,
    latch: OneShotLatch,
    reporter: Arc<dyn DenialReporter>,
    metrics: Option<Arc<GuardMetrics>>,
}

impl NavigationGuard {
    /// Build a guard for `base_locator`, the one resource the surface may load.
    ///
    /// Fails fast on a locator that would make every decision a vacuous deny
    /// (empty) or every suffix check vacuously true (`"./"`).
    pub fn new(base_locator: impl Into<String>, mode: PlatformMode) -> Result<Self> {
        let base_locator = base_locator.into();
        if base_locator.is_empty() {
            return Err(NavGuardError::InvalidBaseLocator(
                "base locator must not be empty".into(),
            ));
        }
        let tail = base_url_tail(&base_locator);
        if tail.is_empty() {
            return Err(NavGuardError::InvalidBaseLocator(format!(
                "base locator {base_locator:?} has an empty comparison tail"
            )));
        }
        let tail_start = base_locator.len() - tail.len();

        Ok(Self {
            base_locator,
            tail_start,
            mode,
            latch: OneShotLatch::new(),
            reporter: Arc::new(TracingReporter),
            metrics: None,
        })
    }

    /// Replace the denial reporter (default: [`TracingReporter`]).
    pub fn with_reporter(mut self, reporter: Arc<dyn DenialReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Attach shared decision metrics.
    pub fn with_metrics(mut self, metrics: Arc<GuardMetrics>) -> Self {
        metrics.guards_active.inc(&[("mode", self.mode.as_str())]);
        if let Some(old) = self.metrics.replace(metrics) {
            old.guards_active.dec(&[("mode", self.mode.as_str())]);
        }
        self
    }

    pub fn base_locator(&self) -> &str {
        &self.base_locator
    }

    /// Suffix a reported initial load must end with.
    pub fn base_url_tail(&self) -> &str {
        &self.base_locator[self.tail_start..]
    }

    pub fn mode(&self) -> PlatformMode {
        self.mode
    }

    pub fn state(&self) -> LatchState {
        self.latch.state()
    }

    /// Allow/deny answer handed back to the webview host.
    pub fn decide(&self, event: &NavigationEvent) -> bool {
        self.evaluate(event).is_allowed()
    }

    /// Evaluate one navigation attempt.
    ///
    /// Every deny is reported exactly once; allows are not reported.
    pub fn evaluate(&self, event: &NavigationEvent) -> NavigationDecision {
        let decision = match self.mode {
            PlatformMode::SkipsInitialLoad => {
                NavigationDecision::Deny(DenyReason::InitialLoadNotRouted)
            }
            PlatformMode::ReportsInitialLoad => self.evaluate_reported(&event.url),
        };

        match decision {
            NavigationDecision::Allow => {
                tracing::debug!(
                    url = %event.url,
                    mode = self.mode.as_str(),
                    "webview: allowed initial load"
                );
                self.record("allow", "none");
            }
            NavigationDecision::Deny(reason) => {
                self.record("deny", reason.as_str());
                self.reporter.report(&DenialRecord {
                    navigation_event: event.clone(),
                    expected_url: self.base_locator.clone(),
                    reason,
                    mode: self.mode,
                });
            }
        }
        decision
    }

    /// Adapt into a URL-only navigation callback (wry-style hosts).
    pub fn into_handler(self) -> impl Fn(String) -> bool + Send + Sync + 'static {
        move |url: String| self.decide(&NavigationEvent::from_url(url))
    }

    fn evaluate_reported(&self, url: &str) -> NavigationDecision {
        if self.latch.is_consumed() {
            return NavigationDecision::Deny(DenyReason::AlreadyLoaded);
        }
        if let Err(reason) = check_url(url, self.base_url_tail()) {
            return NavigationDecision::Deny(reason);
        }
        // Another caller may have won between the check above and here.
        if !self.latch.try_consume() {
            return NavigationDecision::Deny(DenyReason::AlreadyLoaded);
        }
        NavigationDecision::Allow
    }

    fn record(&self, outcome: &str, reason: &str) {
        if let Some(m) = &self.metrics {
            m.record(self.mode.as_str(), outcome, reason);
        }
    }
}

impl Drop for NavigationGuard {
    fn drop(&mut self) {
        if let Some(m) = &self.metrics {
            m.guards_active.dec(&[("mode", self.mode.as_str())]);
        }
    }
}

impl fmt::Debug for NavigationGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("base_locator", &self.base_locator)
            .field("mode", &self.mode)
            .field("state", &self.latch.state())
            .finish_non_exhaustive()
    }
}
