//! Pricing Module
//!
//! Resolves a selection to its catalog record and composes the itemized
//! price. Uses rust_decimal for the arithmetic, exposes f64 amounts.

pub mod accessories;
mod calculator;
pub mod matcher;
pub mod money;

pub use accessories::*;
pub use calculator::*;
pub use matcher::*;
