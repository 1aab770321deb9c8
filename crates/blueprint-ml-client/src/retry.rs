//! Linear-backoff retry policy for collaborator calls.
//!
//! The policy is stateless and lives apart from the calls it wraps: which
//! error classes are retryable is decided by the caller's predicate.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts (not including the initial attempt).
    pub max_retries: u32,
    /// Base delay; attempt N waits `base_delay * N` (1s, 2s, 3s with a 1s base).
    pub base_delay: Duration,
    /// Operation name for logging.
    pub operation_name: String,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            operation_name: "operation".to_string(),
        }
    }
}

impl RetryPolicy {
    /// Create a new policy with the given operation name.
    pub fn new(operation_name: impl Into<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the base delay of the linear schedule.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    /// Execute an async operation under this policy.
    ///
    /// `retryable` decides which errors are worth another attempt; anything
    /// else propagates immediately.
    pub async fn run<F, Fut, T, E, P>(&self, operation: F, retryable: P) -> Result<T, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
        P: Fn(&E) -> bool,
    {
        let mut attempt = 0u32;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if retryable(&e) && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.delay_for_attempt(attempt);
                    warn!(
                        "{} attempt {} failed, retrying in {:?}: {}",
                        self.operation_name, attempt, delay, e
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
