//! Lightweight in-process decision metrics.
//!
//! Counters are stored as atomics behind `DashMap` and rendered in Prometheus
//! text format on demand (the replay tool dumps them after a run).

pub mod metrics;

pub use metrics::GuardMetrics;
