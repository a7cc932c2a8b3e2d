//! Caller-side services
//!
//! The engine is stateless; state that outlives one call (the current
//! catalog snapshot, cached cascade results) lives here.

pub mod cache;
pub mod configurator_service;

pub use cache::OptionsCache;
pub use configurator_service::ConfiguratorService;
