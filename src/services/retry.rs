use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// How a failed fetch is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum attempts, including the first one.
    pub max_attempts: u32,
    pub initial_delay_ms: u32,
    pub multiplier: u32,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_delay_ms: 100,
            multiplier: 5,
        }
    }

    /// Delay before retrying after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> u32 {
        let exponent = attempt.saturating_sub(1);
        self.multiplier
            .saturating_pow(exponent)
            .saturating_mul(self.initial_delay_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(crate::config::Config::QUERY_RETRY_ATTEMPTS)
    }
}

/// Retries an async operation with exponential backoff for rate-limited requests.
///
/// # Behavior
///
/// - Delays follow the policy: 100ms → 500ms → 2500ms → ... by default
/// - Only retries on `AppError::RateLimited`
/// - All other errors immediately propagate
/// - A policy with `max_attempts == 0` still runs the operation once
pub async fn retry_with_backoff<F, Fut, T>(
    mut operation: F,
    policy: RetryPolicy,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(AppError::RateLimited) if attempt < max_attempts => {
                let delay_ms = policy.delay_after(attempt);
                gloo::console::warn!(format!(
                    "Rate limited, retrying in {}ms (attempt {}/{})",
                    delay_ms, attempt, max_attempts
                ));
                TimeoutFuture::new(delay_ms).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
