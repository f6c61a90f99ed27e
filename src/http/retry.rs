//! Retry policies for upstream requests.
//!
//! The explorer issues every request exactly once unless the caller opts in.

use crate::error::HttpError;
use std::time::Duration;

/// Retry policy applied to every upstream GET.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt; failures go straight to the error slot.
    #[default]
    None,
    /// Retry on transport failures and 429/502/503/504 with exponential backoff.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolved config, or `None` for a single attempt.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add ±25% jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// The public API throttles aggressively, so 429 is retried along with
    /// gateway errors.
    pub fn idempotent() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    /// Whether `err` is worth another attempt under this config.
    pub fn is_retryable(&self, err: &HttpError) -> bool {
        match err {
            HttpError::Status { status, .. } => self.retryable_statuses.contains(status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(re) => {
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                #[cfg(target_arch = "wasm32")]
                let retryable = re.is_timeout() || re.is_request();
                retryable
            }
            HttpError::Decode(_) | HttpError::MaxRetriesExceeded { .. } => false,
        }
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> HttpError {
        HttpError::Status {
            status: code,
            status_text: String::new(),
            body: String::new(),
        }
    }

    fn no_jitter(initial_ms: u64, max_ms: u64, factor: f64) -> RetryConfig {
        RetryConfig {
            max_retries: 3,
            initial_delay: Duration::from_millis(initial_ms),
            max_delay: Duration::from_millis(max_ms),
            backoff_factor: factor,
            jitter: false,
            retryable_statuses: vec![],
        }
    }

    #[test]
    fn test_default_policy_is_single_attempt() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
        assert!(RetryPolicy::default().config().is_none());
    }

    #[test]
    fn test_idempotent_retries_throttling_and_gateway_errors() {
        let config = RetryPolicy::Idempotent.config().unwrap();
        for code in [429, 502, 503, 504] {
            assert!(config.is_retryable(&status(code)), "{code} should retry");
        }
        assert!(!config.is_retryable(&status(404)));
        assert!(!config.is_retryable(&status(500)));
    }

    #[test]
    fn test_decode_errors_are_not_retried() {
        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(!RetryConfig::idempotent().is_retryable(&HttpError::Decode(decode)));
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let config = no_jitter(100, 10_000, 2.0);
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 400);
    }

    #[test]
    fn test_delay_caps_at_max() {
        let config = no_jitter(1000, 2000, 10.0);
        assert_eq!(config.delay_for_attempt(3).as_millis(), 2000);
    }

    #[test]
    fn test_jitter_stays_within_quarter_of_base() {
        let config = RetryConfig {
            jitter: true,
            ..no_jitter(1000, 10_000, 1.0)
        };
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((750..=1250).contains(&ms), "delay {ms} out of range");
        }
    }
}
