//! Cache Statistics Module
//!
//! Tracks how often cached reads were served locally versus refreshed upstream.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Reads served from a fresh entry
    pub hits: u64,
    /// Reads that had to fetch a new value
    pub refreshes: u64,
    /// Explicit invalidation requests
    pub invalidations: u64,
    /// Keys currently holding a value
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + refreshes), or 0.0 if nothing was read yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.refreshes;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_refresh(&mut self) {
        self.refreshes += 1;
    }

    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }

    /// A key went from empty to holding a value.
    pub fn increment_entries(&mut self) {
        self.total_entries += 1;
    }

    /// A key lost its value.
    pub fn decrement_entries(&mut self) {
        self.total_entries = self.total_entries.saturating_sub(1);
    }
}
