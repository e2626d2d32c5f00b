//! Denial reporting.
//!
//! Reporting is fire-and-forget: a reporter never influences the decision
//! and has nothing to return.

use std::sync::Mutex;

use serde::Serialize;

use navguard_core::{NavigationEvent, PlatformMode};

use crate::policy::DenyReason;

/// One rejected navigation attempt, with enough context for forensics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DenialRecord {
    /// Full host payload, unmodified.
    pub navigation_event: NavigationEvent,
    /// The guard's base locator.
    pub expected_url: String,
    pub reason: DenyReason,
    pub mode: PlatformMode,
}

/// Sink for denied navigation attempts.
pub trait DenialReporter: Send + Sync {
    fn report(&self, record: &DenialRecord);
}

/// Default reporter: one `warn` event per denial.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl DenialReporter for TracingReporter {
    fn report(&self, record: &DenialRecord) {
        tracing::warn!(
            navigation_event = %record.navigation_event.to_log_value(),
            expected_url = %record.expected_url,
            reason = record.reason.as_str(),
            mode = record.mode.as_str(),
            "webview: rejected navigation event"
        );
    }
}

/// Keeps every denial in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    records: Mutex<Vec<DenialRecord>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records so far.
    pub fn records(&self) -> Vec<DenialRecord> {
        // Poisoned mutex: a reporter panicked mid-push; the data is still usable.
        match self.records.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.records.lock() {
            Ok(g) => g.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DenialReporter for RecordingReporter {
    fn report(&self, record: &DenialRecord) {
        match self.records.lock() {
            Ok(mut g) => g.push(record.clone()),
            Err(poisoned) => poisoned.into_inner().push(record.clone()),
        }
    }
}
