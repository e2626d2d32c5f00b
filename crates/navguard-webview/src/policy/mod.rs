//! Navigation policy layer (URL rules, one-shot latch, guard engine).
//!
//! A guard is built once per embedded content surface and consulted by the
//! webview host for every navigation attempt. The host is the enforcement
//! point: it must not load anything the guard denies.

pub mod engine;
pub mod latch;
pub mod rules;

pub use engine::{DenyReason, NavigationDecision, NavigationGuard};
pub use latch::{LatchState, OneShotLatch};
