//! Options cache
//!
//! Caller-owned cache of cascade results with an explicit TTL and explicit
//! invalidation. The engine modules never see it.

use crate::options::AvailableOptions;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CachedOptions {
    options: Arc<AvailableOptions>,
    cached_at: Instant,
}

impl CachedOptions {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() >= ttl
    }
}

/// TTL cache of available options keyed by request parameters
///
/// A zero TTL disables caching: every lookup recomputes.
#[derive(Debug)]
pub struct OptionsCache {
    entries: DashMap<String, CachedOptions>,
    ttl: Duration,
}

impl OptionsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fresh entry for `key`; an expired entry is dropped
    pub fn get(&self, key: &str) -> Option<Arc<AvailableOptions>> {
        if let Some(entry) = self.entries.get(key)
            && !entry.is_expired(self.ttl)
        {
            return Some(entry.options.clone());
        }

        self.entries
            .remove_if(key, |_, entry| entry.is_expired(self.ttl));
        None
    }

    /// Cached value, or compute, store and return a fresh one
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> Arc<AvailableOptions>
    where
        F: FnOnce() -> AvailableOptions,
    {
        if let Some(options) = self.get(key) {
            tracing::trace!(key, "Options cache hit");
            return options;
        }

        let options = Arc::new(compute());
        self.entries.insert(
            key.to_string(),
            CachedOptions {
                options: options.clone(),
                cached_at: Instant::now(),
            },
        );
        tracing::trace!(key, "Options cache miss");
        options
    }

    /// Drop one entry; returns whether it existed
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn invalidate_all(&self) {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::debug!(dropped, "Options cache cleared");
    }

    /// Drop every expired entry; returns how many were dropped
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(self.ttl));
        before.saturating_sub(self.entries.len())
    }
}
