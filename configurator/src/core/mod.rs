//! Core module: runtime configuration
//!
//! - [`Config`] - configurator configuration loaded from the environment
//! - [`ConfigError`] - configuration validation errors

pub mod config;

pub use config::{Config, ConfigError};
