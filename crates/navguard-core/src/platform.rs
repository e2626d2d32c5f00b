//! Host platform contracts.
//!
//! The two supported webview hosts differ in whether the very first load of
//! the packaged page is routed through the navigation callback, and in how
//! the packaged web-assets directory is addressed.

use serde::{Deserialize, Serialize};

use crate::error::{NavGuardError, Result};

/// Target platform of the embedding app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Navigation-reporting model of this platform's webview.
    pub fn mode(self) -> PlatformMode {
        match self {
            Platform::Android => PlatformMode::SkipsInitialLoad,
            Platform::Ios => PlatformMode::ReportsInitialLoad,
        }
    }

    /// Platform this binary was compiled for, if it is a mobile target.
    pub fn current() -> Option<Platform> {
        if cfg!(target_os = "android") {
            Some(Platform::Android)
        } else if cfg!(target_os = "ios") {
            Some(Platform::Ios)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }
}

/// How the host reports navigation attempts to the guard.
///
/// Fixed at guard construction; never inspected per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformMode {
    /// The legitimate first load never reaches the callback (Android
    /// WebView). Anything that does reach it is rejected.
    SkipsInitialLoad,
    /// The first load is routed through the callback with a host-resolved
    /// absolute `file://` URL (iOS WKWebView). One matching load may pass.
    ReportsInitialLoad,
}

impl PlatformMode {
    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformMode::SkipsInitialLoad => "skips_initial_load",
            PlatformMode::ReportsInitialLoad => "reports_initial_load",
        }
    }
}

const ANDROID_ASSETS_BASE: &str = "file:///android_asset/webview";
// Relative: no API at this layer yields the app bundle's absolute path, so
// the host resolves it against the bundle when loading.
const IOS_ASSETS_BASE: &str = "./webview";

/// Locator prefix of the packaged web-assets directory.
///
/// Used to build both the guard's base locator and the source handed to the
/// webview host.
pub fn resolve_assets_base(platform: Platform) -> &'static str {
    match platform {
        Platform::Android => ANDROID_ASSETS_BASE,
        Platform::Ios => IOS_ASSETS_BASE,
    }
}

impl std::str::FromStr for Platform {
    type Err = NavGuardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(NavGuardError::BadRequest(format!("unknown platform: {other}"))),
        }
    }
}
