//! Cache Module
//!
//! In-memory cache for upstream reads, with an explicit freshness policy
//! (TTL or manual invalidation) and single-flight refreshes per key.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::{CacheEntry, CachePolicy};
pub use stats::CacheStats;
pub use store::CacheStore;
