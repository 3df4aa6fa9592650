//! Cache Entry Module
//!
//! A cached value stamped with the moment it was last refreshed, and the
//! policy deciding how long that refresh stays good.

use std::time::{Duration, Instant};

// == Cache Policy ==
/// Freshness rule applied to every entry of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Entries go stale once older than the duration
    Ttl(Duration),
    /// Entries stay fresh until explicitly invalidated
    Manual,
}

impl CachePolicy {
    /// `0` selects `Manual`, anything else a TTL in seconds.
    pub fn from_ttl_secs(secs: u64) -> Self {
        if secs == 0 {
            CachePolicy::Manual
        } else {
            CachePolicy::Ttl(Duration::from_secs(secs))
        }
    }
}

// == Cache Entry ==
/// Represents a single cached value with its refresh time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was fetched
    pub refreshed_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Creates an entry refreshed now.
    pub fn new(value: V) -> Self {
        Self {
            value,
            refreshed_at: Instant::now(),
        }
    }

    /// Time elapsed since the last refresh.
    pub fn age(&self) -> Duration {
        self.refreshed_at.elapsed()
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served under `policy`.
    ///
    /// An entry whose age equals the TTL is already stale.
    pub fn is_fresh(&self, policy: &CachePolicy) -> bool {
        match policy {
            CachePolicy::Ttl(ttl) => self.age() < *ttl,
            CachePolicy::Manual => true,
        }
    }
}
