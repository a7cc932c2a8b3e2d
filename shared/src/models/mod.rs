//! Data models
//!
//! Shared between the configurator engine and its callers (cart, export, UI).
//! Catalog records are read-only snapshots; selections are owned by the caller.

pub mod cart;
pub mod price;
pub mod record;
pub mod selection;
pub mod snapshot;

// Re-exports
pub use cart::*;
pub use price::*;
pub use record::*;
pub use selection::*;
pub use snapshot::*;
