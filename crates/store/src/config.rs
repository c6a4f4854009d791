//! Store configuration.

use std::time::Duration;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Runtime configuration for all boundary calls.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Upper bound for one backend call; expiry surfaces as
    /// `StoreError::Unavailable`.
    pub request_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let request_timeout = std::env::var("STORE_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_TIMEOUT_MS));
        Self { request_timeout }
    }

    pub fn with_timeout(request_timeout: Duration) -> Self {
        Self { request_timeout }
    }
}
