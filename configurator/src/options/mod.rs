//! Cascading Option Filter
//!
//! Narrows the candidate records for one model as the user commits choices,
//! and derives which option values are still selectable so a UI can disable
//! impossible ones. Narrowing is monotonic: a later step never reports a
//! value the previous step's candidates did not have.

mod collect;
mod filter;

pub use collect::*;
pub use filter::*;

use shared::models::{CatalogRecord, Selection};

/// Root selection, narrowing and collection in one call
pub fn cascade(
    records: &[CatalogRecord],
    model_code: &str,
    style: Option<&str>,
    selection: &Selection,
) -> AvailableOptions {
    let root = select_by_model_and_style(records, model_code, style);
    let narrowed = narrow(root, selection);
    collect_options(&narrowed)
}
