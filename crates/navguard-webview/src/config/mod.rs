//! Guard config loader (strict parsing).

pub mod schema;

use std::fs;

use navguard_core::error::{NavGuardError, Result};

pub use schema::{NavGuardConfig, SurfaceConfig};

pub fn load_from_file(path: &str) -> Result<NavGuardConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| NavGuardError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<NavGuardConfig> {
    let cfg: NavGuardConfig = serde_yaml::from_str(s)
        .map_err(|e| NavGuardError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
