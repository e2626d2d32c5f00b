//! navguard core: platform-agnostic navigation types, platform contracts, and errors.
//!
//! This crate defines the contracts shared by the webview guard, the replay
//! tooling, and embedders. It carries no transport or runtime dependencies so it
//! can be linked into mobile and desktop hosts alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `NavGuardError`/`Result`; a guard must never
//! crash the host on hostile navigation input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod platform;

/// Shared result type.
pub use error::{NavGuardError, Result};
pub use event::NavigationEvent;
pub use platform::{resolve_assets_base, Platform, PlatformMode};
