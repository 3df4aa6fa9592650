//! Response DTOs for the gateway's own endpoints
//!
//! Employee endpoints return `Employee` values directly; these cover the
//! health, admin and error bodies.

use serde::Serialize;

/// Response body for the cache stats endpoint (GET /admin/cache)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Reads served from a fresh entry
    pub hits: u64,
    /// Reads that went upstream
    pub refreshes: u64,
    /// Explicit invalidations
    pub invalidations: u64,
    /// Keys currently holding a value
    pub cached_keys: usize,
    /// hits / (hits + refreshes)
    pub hit_rate: f64,
}

impl CacheStatsResponse {
    /// Creates a new CacheStatsResponse from cache counters
    pub fn new(hits: u64, refreshes: u64, invalidations: u64, cached_keys: usize) -> Self {
        let total_reads = hits + refreshes;
        let hit_rate = if total_reads > 0 {
            hits as f64 / total_reads as f64
        } else {
            0.0
        };
        Self {
            hits,
            refreshes,
            invalidations,
            cached_keys,
            hit_rate,
        }
    }
}

/// Generic acknowledgement body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
