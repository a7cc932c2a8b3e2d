//! Unified error codes for the configurator
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Catalog / configuration errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,

    // ==================== 6xxx: Catalog ====================
    /// No catalog record matches the selection, even after relaxation
    ConfigurationNotFound = 6002,
    /// Selection is structurally invalid (e.g. missing model)
    InvalidSelection = 6003,
    /// Catalog snapshot could not be decoded
    InvalidCatalog = 6004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Catalog store unreachable
    StorageUnavailable = 9003,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",

            Self::ConfigurationNotFound => "No catalog item matches the selected configuration",
            Self::InvalidSelection => "Invalid selection",
            Self::InvalidCatalog => "Invalid catalog data",

            Self::InternalError => "Internal server error",
            Self::StorageUnavailable => "Catalog storage unavailable",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),

            // Catalog
            6002 => Ok(ErrorCode::ConfigurationNotFound),
            6003 => Ok(ErrorCode::InvalidSelection),
            6004 => Ok(ErrorCode::InvalidCatalog),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::StorageUnavailable),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
