//! Cache Store Module
//!
//! Keyed store of `CacheEntry` values. Each key has its own async lock,
//! held across the refresh, so concurrent readers of a cold or stale key
//! trigger a single fetch and then share its result.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CachePolicy, CacheStats};

type Slot<V> = Arc<Mutex<Option<CacheEntry<V>>>>;

// == Cache Store ==
/// Refresh-on-read cache with per-key single-flight refreshes.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// One lockable slot per key
    slots: Mutex<HashMap<String, Slot<V>>>,
    /// Performance statistics
    stats: Mutex<CacheStats>,
    /// Freshness rule for every entry
    policy: CachePolicy,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            stats: Mutex::new(CacheStats::new()),
            policy,
        }
    }

    async fn slot(&self, key: &str) -> Slot<V> {
        let mut slots = self.slots.lock().await;
        slots.entry(key.to_string()).or_default().clone()
    }

    // == Get Or Refresh ==
    /// Returns the cached value for `key`, calling `fetch` when the entry is
    /// missing or stale.
    ///
    /// A failed fetch leaves the slot as it was and is returned to the caller.
    pub async fn get_or_refresh<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(key).await;
        let mut entry = slot.lock().await;

        if let Some(cached) = entry.as_ref() {
            if cached.is_fresh(&self.policy) {
                self.stats.lock().await.record_hit();
                return Ok(cached.value.clone());
            }
            debug!("Cache entry '{}' is stale after {:?}", key, cached.age());
        } else {
            debug!("Cache miss for '{}'", key);
        }

        let value = fetch().await?;
        let was_empty = entry.is_none();
        *entry = Some(CacheEntry::new(value.clone()));

        let mut stats = self.stats.lock().await;
        stats.record_refresh();
        if was_empty {
            stats.increment_entries();
        }

        Ok(value)
    }

    // == Invalidate ==
    /// Drops the value cached under `key`, if any.
    pub async fn invalidate(&self, key: &str) {
        let slot = self.slots.lock().await.get(key).cloned();
        let removed = match slot {
            Some(slot) => slot.lock().await.take().is_some(),
            None => false,
        };

        let mut stats = self.stats.lock().await;
        stats.record_invalidation();
        if removed {
            stats.decrement_entries();
            debug!("Invalidated cache entry '{}'", key);
        }
    }

    /// Drops every cached value.
    pub async fn invalidate_all(&self) {
        let slots: Vec<Slot<V>> = self.slots.lock().await.values().cloned().collect();
        for slot in slots {
            let mut entry = slot.lock().await;
            if entry.take().is_some() {
                self.stats.lock().await.decrement_entries();
            }
        }

        self.stats.lock().await.record_invalidation();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.stats.lock().await.clone()
    }
}
