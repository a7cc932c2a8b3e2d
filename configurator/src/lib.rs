//! Door Configurator Engine
//!
//! # Overview
//!
//! Turns a catalog of door records and a user's partial selection into:
//!
//! - **Available options** (`options`): still-selectable values after each choice
//! - **A resolved record and itemized price** (`pricing`): relaxation ladder, max-price tie-break
//! - **Export rows** (`export`): display name and fixed columns for any destination
//!
//! The engine functions are pure over the records they are given. Caching and
//! snapshot replacement live in `services`.
//!
//! # Module layout
//!
//! ```text
//! configurator/src/
//! ├── attributes/    # Attribute decoding and typed access
//! ├── height.rs      # Virtual height bands
//! ├── options/       # Cascading option filter
//! ├── pricing/       # Record resolution and price composition
//! ├── export/        # Cart line projection
//! ├── services/      # Snapshot holder and options cache
//! ├── core/          # Configuration
//! └── utils/         # Logging
//! ```

pub mod attributes;
pub mod core;
pub mod error;
pub mod export;
pub mod height;
pub mod options;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export public entry points
pub use crate::core::{Config, ConfigError};
pub use error::{EngineError, EngineResult};
pub use export::{ExportColumn, ExportRow, project};
pub use options::{AvailableOptions, cascade};
pub use pricing::{Accessories, Resolution, calculate, resolve};
pub use services::{ConfiguratorService, OptionsCache};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};
