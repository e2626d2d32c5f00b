//! Shared error type across navguard crates.

use thiserror::Error;

/// Stable error codes (used by tooling output and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Base locator unusable for matching.
    InvalidBaseLocator,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Lookup miss (unknown surface id).
    NotFound,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in tool output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidBaseLocator => "INVALID_BASE_LOCATOR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NavGuardError>;

/// Unified error type used by core and webview crates.
///
/// Navigation decisions never produce one of these: they degrade to deny.
/// Errors only come out of construction and configuration.
#[derive(Debug, Error)]
pub enum NavGuardError {
    #[error("invalid base locator: {0}")]
    InvalidBaseLocator(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NavGuardError {
    /// Map error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            NavGuardError::InvalidBaseLocator(_) => ErrorCode::InvalidBaseLocator,
            NavGuardError::BadRequest(_) => ErrorCode::BadRequest,
            NavGuardError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            NavGuardError::NotFound(_) => ErrorCode::NotFound,
            NavGuardError::Internal(_) => ErrorCode::Internal,
        }
    }
}
