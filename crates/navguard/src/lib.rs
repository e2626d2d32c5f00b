//! Top-level facade crate for navguard.
//!
//! Re-exports the core types and the webview guard library so embedders can
//! depend on a single crate.

pub mod core {
    pub use navguard_core::*;
}

pub mod webview {
    pub use navguard_webview::*;
}
