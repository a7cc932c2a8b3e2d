//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ConfigurationNotFound => StatusCode::NOT_FOUND,
            Self::InvalidSelection => StatusCode::BAD_REQUEST,

            Self::InvalidCatalog => StatusCode::UNPROCESSABLE_ENTITY,

            Self::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            Self::InternalError | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
