//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// API client configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === API Endpoint ===
    /// Base URL of the backing API (absolute http/https URL).
    pub api_base_url: String,

    /// API key injected into every outgoing request.
    pub api_key: String,

    // === HTTP Tuning ===
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Idle connection pool size per host.
    #[serde(default = "default_http_pool_size")]
    pub http_pool_size: usize,
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

fn default_http_pool_size() -> usize {
    10
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    ///
    /// A client must never be built from an invalid configuration: a missing
    /// key or a bad base URL would otherwise surface as remote failures on
    /// every request instead of one error here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let url = Url::parse(&self.api_base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "unsupported scheme {:?}",
                url.scheme()
            )));
        }

        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(())
    }

    /// Base URL without any trailing slash, ready for path concatenation.
    pub fn base_url_trimmed(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
