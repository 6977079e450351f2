//! Feed client configuration.
//!
//! Loaded from environment variables, then selectively overridden by CLI flags:
//! - `FEED_BASE_URL` - Base URL of the feed service (default: `http://localhost:9999/api/slow/`)
//! - `FEED_CONNECT_TIMEOUT_SECS` - Connect timeout in seconds (default: 30)
//! - `FEED_REQUEST_TIMEOUT_SECS` - Whole-request timeout in seconds (default: 60)

use std::time::Duration;

/// Default feed service for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9999/api/slow/";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Upper bound for one request, including reading the body.
    pub request_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl FeedConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secs = |key: &str, default: u64| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            base_url: lookup("FEED_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            connect_timeout: Duration::from_secs(secs(
                "FEED_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
            request_timeout: Duration::from_secs(secs(
                "FEED_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
        }
    }

    /// Apply CLI overrides on top of this configuration.
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }
}
