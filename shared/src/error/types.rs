//! Error types

use super::codes::ErrorCode;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for diagnostics (e.g. the attempted selection)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a "no catalog record matches this configuration" error
    pub fn configuration_not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigurationNotFound, msg)
    }

    /// Create an invalid selection error
    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidSelection, msg)
    }

    /// Create an invalid catalog error
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidCatalog, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a storage unavailable error
    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageUnavailable, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::ConfigurationNotFound);
        assert_eq!(err.code, ErrorCode::ConfigurationNotFound);
        assert_eq!(
            err.message,
            "No catalog item matches the selected configuration"
        );
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::configuration_not_found("no match")
            .with_detail("model", "DM_Base_1")
            .with_detail("width", 800);

        let details = err.details.unwrap();
        assert_eq!(details.get("model").unwrap(), "DM_Base_1");
        assert_eq!(details.get("width").unwrap(), 800);
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        assert_eq!(
            AppError::invalid_selection("model is required").code,
            ErrorCode::InvalidSelection
        );
        assert_eq!(AppError::invalid_catalog("bad").code, ErrorCode::InvalidCatalog);
        assert_eq!(AppError::internal("bad").code, ErrorCode::InternalError);
        assert_eq!(AppError::config("bad").code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_not_found_distinguishable_from_infrastructure() {
        let absent = AppError::configuration_not_found("timeout while matching");
        let infra = AppError::storage_unavailable("timeout while matching");

        // Same message text, different kind
        assert_eq!(absent.message, infra.message);
        assert_eq!(absent.code.category(), ErrorCategory::Catalog);
        assert_eq!(infra.code.category(), ErrorCategory::System);
        assert_eq!(absent.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::InvalidCatalog, "doors must be an array");
        assert_eq!(format!("{}", err), "doors must be an array");
    }
}
