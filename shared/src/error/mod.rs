//! Unified error system for the configurator
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Catalog / configuration errors
//! - 9xxx: System errors
//!
//! A configuration that resolves to no catalog record is a catalog error
//! (6xxx), never a system error. Callers tell them apart by
//! [`ErrorCode::category`], not by message text.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCategory, ErrorCode};
//!
//! let err = AppError::configuration_not_found("no door for DM_Base_1 / Enamel")
//!     .with_detail("model", "DM_Base_1");
//! assert_eq!(err.code, ErrorCode::ConfigurationNotFound);
//! assert_eq!(err.code.category(), ErrorCategory::Catalog);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
