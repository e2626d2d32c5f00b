use std::collections::HashSet;

use navguard_core::error::{NavGuardError, Result};
use navguard_core::Platform;
use serde::Deserialize;

use crate::source::EmbeddedSource;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavGuardConfig {
    pub version: u32,

    pub platform: Platform,

    #[serde(default)]
    pub surfaces: Vec<SurfaceConfig>,
}

impl NavGuardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NavGuardError::UnsupportedVersion);
        }
        if self.surfaces.is_empty() {
            return Err(NavGuardError::BadRequest("surfaces must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for s in &self.surfaces {
            s.validate()?;
            if !seen.insert(s.id.as_str()) {
                return Err(NavGuardError::BadRequest(format!(
                    "duplicate surface id: {}",
                    s.id
                )));
            }
        }
        Ok(())
    }

    pub fn surface(&self, id: &str) -> Result<&SurfaceConfig> {
        self.surfaces
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| NavGuardError::NotFound(format!("unknown surface: {id}")))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceConfig {
    pub id: String,
    /// Page path relative to the packaged assets directory.
    pub page: String,
}

impl SurfaceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(NavGuardError::BadRequest("surface.id must not be empty".into()));
        }
        if self.page.is_empty() {
            return Err(NavGuardError::BadRequest(format!(
                "surface {}: page must not be empty",
                self.id
            )));
        }
        if self.page.starts_with('/') || self.page.contains("://") {
            return Err(NavGuardError::BadRequest(format!(
                "surface {}: page must be relative to the assets directory",
                self.id
            )));
        }
        // A guard would reject every load of such a page.
        if self.page.contains(&['?', '&'][..]) {
            return Err(NavGuardError::BadRequest(format!(
                "surface {}: page must not carry query syntax",
                self.id
            )));
        }
        Ok(())
    }

    pub fn source(&self, platform: Platform, html: impl Into<String>) -> Result<EmbeddedSource> {
        EmbeddedSource::for_page(platform, &self.page, html)
    }
}
