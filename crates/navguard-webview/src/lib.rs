//! navguard webview library entry.
//!
//! Wires the navigation policy, denial reporting, decision metrics, source
//! assembly, and config loading into what an embedding screen needs to put a
//! guard in front of a webview. Consumed by embedders, by the replay binary
//! (`main.rs`), and by integration tests.

pub mod config;
pub mod obs;
pub mod policy;
pub mod report;
pub mod source;

pub use policy::{DenyReason, LatchState, NavigationDecision, NavigationGuard};
pub use report::{DenialRecord, DenialReporter, RecordingReporter, TracingReporter};
pub use source::EmbeddedSource;
