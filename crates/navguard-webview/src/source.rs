//! Source assembly for embedded content surfaces.
//!
//! The page HTML arrives pre-rendered. This module only decides where the
//! host should believe it was loaded from, and builds the guard that
//! matches that location.

use navguard_core::error::{NavGuardError, Result};
use navguard_core::{resolve_assets_base, Platform, PlatformMode};

use crate::policy::NavigationGuard;

/// Origins the host may treat as the surface's own.
pub const ORIGIN_WHITELIST: [&str; 1] = ["file://"];

/// Whether `url` falls under [`ORIGIN_WHITELIST`].
pub fn origin_allowed(url: &str) -> bool {
    ORIGIN_WHITELIST.iter().any(|o| url.starts_with(o))
}

/// What the webview host is handed: a base URL plus inline HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedSource {
    pub base_url: String,
    pub html: String,
}

impl EmbeddedSource {
    /// Source for `page` inside the platform's packaged assets directory,
    /// e.g. `./webview/editHistory.html` on iOS.
    pub fn for_page(platform: Platform, page: &str, html: impl Into<String>) -> Result<Self> {
        let page = page.trim_start_matches('/');
        if page.is_empty() {
            return Err(NavGuardError::BadRequest("page must not be empty".into()));
        }
        Ok(Self {
            base_url: format!("{}/{}", resolve_assets_base(platform), page),
            html: html.into(),
        })
    }

    /// Guard expecting exactly this source's base URL.
    pub fn guard(&self, mode: PlatformMode) -> Result<NavigationGuard> {
        NavigationGuard::new(self.base_url.clone(), mode)
    }
}
