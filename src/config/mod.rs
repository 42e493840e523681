#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ApodError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_UPSTREAM_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Upstream settings, read once at startup and handed to the client.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub upstream_endpoint: String,
    pub timeout_seconds: u64,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            upstream_endpoint: DEFAULT_UPSTREAM_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.upstream_endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable lookup, `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An absent key is left for the upstream API to reject.
        let api_key = lookup("NASA_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("NASA_API_KEY is not set, upstream requests will be rejected");
        }

        let timeout_seconds = match lookup("UPSTREAM_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ApodError::InvalidConfigValueError {
                    field: "UPSTREAM_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "Value must be a whole number of seconds".to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            api_key,
            upstream_endpoint: lookup("NASA_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_ENDPOINT.to_string()),
            timeout_seconds,
        })
    }
}

// Hand-written so the key never reaches the logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("upstream_endpoint", &self.upstream_endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ConfigProvider for GatewayConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn upstream_endpoint(&self) -> &str {
        &self.upstream_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream_endpoint", &self.upstream_endpoint)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;

        tracing::debug!("✅ Gateway configuration validation passed");
        Ok(())
    }
}
