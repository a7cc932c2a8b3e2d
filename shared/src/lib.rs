//! Shared types for the door configurator
//!
//! Plain data carried between the configurator engine and its callers:
//! catalog records, selections, price results, cart lines and the
//! unified error types.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    CartLine, CatalogRecord, CatalogSnapshot, LineKind, MirrorOption, PriceLine, PriceResult,
    Selection,
};
pub use serde::{Deserialize, Serialize};
