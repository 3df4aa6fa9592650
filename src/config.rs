//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CachePolicy;
use crate::client::{Backoff, RetryPolicy};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream employee resource
    pub employee_server_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds a cached employee list stays fresh, 0 = until invalidated
    pub cache_ttl: u64,
    /// Total attempts per upstream call while rate limited
    pub retry_max_attempts: u32,
    /// First backoff delay in milliseconds, doubled per retry
    pub retry_initial_delay_ms: u64,
    /// Upper bound on a single backoff delay in milliseconds
    pub retry_max_delay_ms: u64,
    /// Upstream request timeout in seconds, 0 = default
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EMPLOYEE_SERVER_URL` - Upstream base URL (default: http://localhost:8112/api/v1/employee)
    /// - `SERVER_PORT` - HTTP server port (default: 8111)
    /// - `CACHE_TTL` - List cache freshness in seconds (default: 30)
    /// - `RETRY_MAX_ATTEMPTS` - Attempts per call on 429 (default: 4)
    /// - `RETRY_INITIAL_DELAY_MS` - First backoff delay (default: 500)
    /// - `RETRY_MAX_DELAY_MS` - Backoff cap (default: 8000)
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds, 0 falls back to the default (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            employee_server_url: env::var("EMPLOYEE_SERVER_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.employee_server_url),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            retry_max_attempts: env_or("RETRY_MAX_ATTEMPTS", defaults.retry_max_attempts),
            retry_initial_delay_ms: env_or(
                "RETRY_INITIAL_DELAY_MS",
                defaults.retry_initial_delay_ms,
            ),
            retry_max_delay_ms: env_or("RETRY_MAX_DELAY_MS", defaults.retry_max_delay_ms),
            request_timeout: env_or("REQUEST_TIMEOUT", defaults.request_timeout),
        }
    }

    /// Retry policy for upstream calls.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_max_attempts,
            Backoff::Exponential {
                initial: Duration::from_millis(self.retry_initial_delay_ms),
                multiplier: 2.0,
                max: Duration::from_millis(self.retry_max_delay_ms),
            },
        )
    }

    /// Freshness policy for the employee list cache.
    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy::from_ttl_secs(self.cache_ttl)
    }

    /// Upstream request timeout; a zero setting would fail every call.
    pub fn request_timeout(&self) -> Duration {
        match self.request_timeout {
            0 => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            employee_server_url: "http://localhost:8112/api/v1/employee".to_string(),
            server_port: 8111,
            cache_ttl: 30,
            retry_max_attempts: 4,
            retry_initial_delay_ms: 500,
            retry_max_delay_ms: 8000,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
