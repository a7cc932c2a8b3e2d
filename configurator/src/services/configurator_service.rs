//! Configurator Service
//!
//! Holds the current catalog snapshot and the options cache for callers that
//! serve many requests (an API layer, a cart). The engine functions it calls
//! stay pure; the snapshot is swapped whole and the cache is cleared with it.

use super::cache::OptionsCache;
use crate::error::EngineResult;
use crate::export::{ExportRow, classify_line, project};
use crate::options::{AvailableOptions, cascade};
use crate::pricing::{Accessories, AccessoryLookup, SnapshotLookup, calculate, resolve};
use parking_lot::RwLock;
use serde::Serialize;
use shared::models::{CartLine, CatalogRecord, CatalogSnapshot, LineKind, PriceResult, Selection};
use std::sync::Arc;
use std::time::Duration;

/// Cache key parameters of one cascade request
#[derive(Serialize)]
struct OptionsKey<'a> {
    model_code: &'a str,
    style: Option<&'a str>,
    selection: &'a Selection,
}

#[derive(Clone)]
pub struct ConfiguratorService {
    snapshot: Arc<RwLock<Arc<CatalogSnapshot>>>,
    cache: Arc<OptionsCache>,
}

impl std::fmt::Debug for ConfiguratorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let records = self.snapshot.read().record_count();
        f.debug_struct("ConfiguratorService")
            .field("records", &records)
            .field("cached_options", &self.cache.len())
            .finish()
    }
}

impl ConfiguratorService {
    pub fn new(snapshot: CatalogSnapshot, cache_ttl: Duration) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Arc::new(snapshot))),
            cache: Arc::new(OptionsCache::new(cache_ttl)),
        }
    }

    /// Current snapshot; callers keep a consistent view while it is held
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.snapshot.read().clone()
    }

    pub fn cache(&self) -> &OptionsCache {
        &self.cache
    }

    /// Swap the catalog and drop every cached cascade result
    pub fn replace_snapshot(&self, snapshot: CatalogSnapshot) {
        let records = snapshot.record_count();
        *self.snapshot.write() = Arc::new(snapshot);
        self.cache.invalidate_all();
        tracing::info!(records, "Catalog snapshot replaced");
    }

    /// Still-selectable options for a model, cached per request parameters
    pub fn available_options(
        &self,
        model_code: &str,
        style: Option<&str>,
        selection: &Selection,
    ) -> Arc<AvailableOptions> {
        let key = options_key(model_code, style, selection);
        let snapshot = self.snapshot();
        self.cache.get_or_compute(&key, || {
            cascade(&snapshot.doors, model_code, style, selection)
        })
    }

    pub fn price(&self, selection: &Selection) -> EngineResult<PriceResult> {
        let snapshot = self.snapshot();
        let lookup = SnapshotLookup::from_snapshot(&snapshot);
        let accessories = Accessories::new(&snapshot.hardware_kits, &snapshot.handles, &lookup);
        calculate(&snapshot.doors, selection, &accessories)
    }

    /// Export row for a cart line, rebuilt from live data
    ///
    /// A price stored on the line is what was charged and wins over a fresh
    /// calculation. Door lines that no longer resolve export from their own
    /// fields. Accessory lines read their handle or limiter record and are
    /// never repriced.
    pub fn export_line(&self, line: &CartLine, fallback_model_name: Option<&str>) -> ExportRow {
        let snapshot = self.snapshot();
        let selection = &line.selection;

        let kind = classify_line(line);
        if kind != LineKind::Door {
            let record = accessory_record(&snapshot, selection, kind);
            return project(line, record.as_ref(), line.price.as_ref(), fallback_model_name);
        }

        let record = resolve(&snapshot.doors, selection)
            .ok()
            .map(|resolution| resolution.candidate.record.clone());
        if let Some(charged) = line.price.as_ref() {
            return project(line, record.as_ref(), Some(charged), fallback_model_name);
        }

        let price = match self.price(selection) {
            Ok(price) => Some(price),
            Err(e) => {
                tracing::debug!(line_id = %line.id, error = %e, "Exporting unpriced line");
                None
            }
        };

        project(line, record.as_ref(), price.as_ref(), fallback_model_name)
    }
}

/// Catalog record behind an accessory line
fn accessory_record(
    snapshot: &CatalogSnapshot,
    selection: &Selection,
    kind: LineKind,
) -> Option<CatalogRecord> {
    let lookup = SnapshotLookup::from_snapshot(snapshot);
    match kind {
        LineKind::Door => None,
        LineKind::Handle | LineKind::Backplate => {
            let accessories = Accessories::new(&snapshot.hardware_kits, &snapshot.handles, &lookup);
            selection
                .handle_id
                .as_deref()
                .and_then(|id| accessories.handle(id))
                .cloned()
        }
        LineKind::Limiter => selection
            .limiter_id
            .as_deref()
            .and_then(|id| lookup.limiter(id)),
    }
}

fn options_key(model_code: &str, style: Option<&str>, selection: &Selection) -> String {
    let key = OptionsKey {
        model_code: model_code.trim(),
        style: style.map(str::trim),
        selection,
    };
    serde_json::to_string(&key).unwrap_or_else(|_| model_code.to_string())
}
