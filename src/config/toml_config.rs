use crate::config::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_UPSTREAM_ENDPOINT, MAX_TIMEOUT_SECONDS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ApodError, Result};
use crate::utils::validation::{validate_range, validate_socket_addr, validate_url, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:9000";

/// File based alternative to [`GatewayConfig`](crate::config::GatewayConfig)
/// for the local server.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    pub timeout_seconds: Option<u64>,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_UPSTREAM_ENDPOINT.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl TomlConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ApodError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unset variables become empty.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ApodError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!("Environment variable {} referenced in config is not set", var_name);
                String::new()
            })
        });

        Ok(result.to_string())
    }

    pub fn bind(&self) -> &str {
        &self.server.bind
    }
}

impl ConfigProvider for TomlConfig {
    fn api_key(&self) -> &str {
        &self.upstream.api_key
    }

    fn upstream_endpoint(&self) -> &str {
        &self.upstream.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream.endpoint", &self.upstream.endpoint)?;
        if let Some(timeout) = self.upstream.timeout_seconds {
            validate_range("upstream.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        validate_socket_addr("server.bind", &self.server.bind)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[upstream]
endpoint = "https://api.example.com/planetary/apod"
api_key = "DEMO_KEY"
timeout_seconds = 5

[server]
bind = "0.0.0.0:8080"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.upstream_endpoint(), "https://api.example.com/planetary/apod");
        assert_eq!(config.api_key(), "DEMO_KEY");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.bind(), "0.0.0.0:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_optional_sections() {
        let config = TomlConfig::from_toml_str("[upstream]\n").unwrap();

        assert_eq!(config.upstream_endpoint(), DEFAULT_UPSTREAM_ENDPOINT);
        assert_eq!(config.api_key(), "");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.bind(), DEFAULT_BIND);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("APOD_TEST_KEY_SUBST", "from-env");

        let toml_content = r#"
[upstream]
api_key = "${APOD_TEST_KEY_SUBST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), "from-env");

        std::env::remove_var("APOD_TEST_KEY_SUBST");
    }

    #[test]
    fn test_config_validation() {
        let bad_endpoint = TomlConfig::from_toml_str("[upstream]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(bad_endpoint.validate().is_err());

        let bad_bind =
            TomlConfig::from_toml_str("[upstream]\n[server]\nbind = \"nowhere\"\n").unwrap();
        assert!(bad_bind.validate().is_err());

        assert!(TomlConfig::from_toml_str("upstream = 3").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[upstream]\napi_key = \"file-key\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api_key(), "file-key");
    }
}
