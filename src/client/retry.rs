//! Retry Policy
//!
//! Re-runs an upstream call while it keeps failing with a rate-limit
//! response, sleeping between attempts according to a backoff function.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{ClientError, ClientResult};

// == Backoff ==
/// Delay between consecutive attempts.
#[derive(Debug, Clone, PartialEq)]
pub enum Backoff {
    /// Same delay before every retry
    Fixed(Duration),
    /// `initial * multiplier^(retry - 1)`, clamped to `[0, max]`
    Exponential {
        initial: Duration,
        multiplier: f64,
        max: Duration,
    },
}

impl Backoff {
    /// Delay to wait before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        match self {
            Backoff::Fixed(delay) => *delay,
            Backoff::Exponential {
                initial,
                multiplier,
                max,
            } => {
                let exponent = retry.saturating_sub(1) as i32;
                let scaled = initial.as_secs_f64() * multiplier.powi(exponent);
                if !scaled.is_finite() || scaled >= max.as_secs_f64() {
                    *max
                } else if scaled <= 0.0 {
                    Duration::ZERO
                } else {
                    Duration::from_secs_f64(scaled)
                }
            }
        }
    }
}

// == Retry Policy ==
/// Bounded retry on upstream rate limiting.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Backoff,
}

impl RetryPolicy {
    /// Creates a policy; `max_attempts` counts the first call and is at least 1.
    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// A policy that never retries.
    pub fn no_retry() -> Self {
        Self::new(1, Backoff::Fixed(Duration::ZERO))
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    // == Run ==
    /// Runs `call` until it succeeds, fails with a non rate-limit error, or
    /// the attempt budget is spent.
    ///
    /// `operation` only labels log lines.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> ClientResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Ok(value) => {
                    if attempt > 1 {
                        info!(
                            "Retry '{}' succeeded after {} attempts",
                            operation, attempt
                        );
                    }
                    return Ok(value);
                }
                Err(err) if err.is_rate_limited() => {
                    if attempt >= self.max_attempts {
                        warn!(
                            "Retry '{}' gave up after {} attempts",
                            operation, attempt
                        );
                        return Err(ClientError::RateLimited { attempts: attempt });
                    }
                    let wait = self.backoff.delay_for(attempt);
                    warn!(
                        "Retry attempt #{} for '{}' - waiting {}ms before next attempt. Reason: {}",
                        attempt,
                        operation,
                        wait.as_millis(),
                        err
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            4,
            Backoff::Exponential {
                initial: Duration::from_millis(500),
                multiplier: 2.0,
                max: Duration::from_secs(8),
            },
        )
    }
}
