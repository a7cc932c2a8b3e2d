//! Engine errors
//!
//! The engine has a single propagating failure: no catalog record matches the
//! selection. Everything optional degrades to "contributes nothing" instead.

use shared::error::AppError;
use shared::models::Selection;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Expected, user-facing outcome: the selection is not in the catalog
    #[error("No catalog record matches the selection")]
    NoMatchingRecord { selection: Box<Selection> },
}

impl EngineError {
    pub fn no_matching_record(selection: &Selection) -> Self {
        Self::NoMatchingRecord {
            selection: Box::new(selection.clone()),
        }
    }

    /// The selection that failed to resolve
    pub fn selection(&self) -> &Selection {
        match self {
            Self::NoMatchingRecord { selection } => selection,
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match &err {
            EngineError::NoMatchingRecord { selection } => {
                let mut app = AppError::configuration_not_found(err.to_string());
                if let Ok(value) = serde_json::to_value(selection.as_ref()) {
                    app = app.with_detail("selection", value);
                }
                app
            }
        }
    }
}

/// Engine result type
pub type EngineResult<T> = Result<T, EngineError>;
