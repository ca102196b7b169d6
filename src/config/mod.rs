//! Client configuration: backend location, request timeout, notification
//! lifetime.
//!
//! ```ignore
//! let config = DirectoryConfig::from_env()?
//!     .with_request_timeout(Duration::from_secs(5));
//! ```

mod error;

pub use error::ConfigError;

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3_000;

pub const ENV_API_BASE: &str = "PROFILE_DIRECTORY_API_BASE";
pub const ENV_TIMEOUT_MS: &str = "PROFILE_DIRECTORY_TIMEOUT_MS";
pub const ENV_NOTIFICATION_TTL_MS: &str = "PROFILE_DIRECTORY_NOTIFICATION_TTL_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    api_base: String,
    request_timeout_ms: u64,
    notification_ttl_ms: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
        }
    }
}

impl DirectoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Defaults overridden by any `PROFILE_DIRECTORY_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base) = lookup(ENV_API_BASE) {
            config.api_base = base;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.request_timeout_ms = parse_millis(ENV_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_NOTIFICATION_TTL_MS) {
            config.notification_ttl_ms = parse_millis(ENV_NOTIFICATION_TTL_MS, &raw)?;
        }
        Ok(config.normalized())
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self.normalized()
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = duration_millis(timeout);
        self
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl_ms = duration_millis(ttl);
        self
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base.trim_end_matches('/').len();
        self.api_base.truncate(trimmed);
        self
    }
}

fn parse_millis(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
