//! Gateway configuration
//!
//! The service is configured from a single YAML file (`gateway.yaml` by
//! default) with three sections: the hosted backend to talk to, outbound
//! HTTP client settings, and the local server settings.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete gateway configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Hosted backend (identity provider + partner store)
    pub backend: BackendConfig,

    /// Outbound HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,

    /// Local server settings
    pub server: ServerSettings,
}

/// Hosted backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend (e.g. "https://xyz.backend.example")
    pub base_url: String,

    /// API key sent on every backend request
    pub api_key: String,
}

/// Outbound HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retries for retryable failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Optional rate limit for backend calls (requests per second)
    #[serde(default)]
    pub rate_limit_rps: Option<u32>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            rate_limit_rps: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    2
}

/// Local server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Public origin that redirect paths resolve against
    /// (e.g. "https://cardmatch.example")
    pub public_origin: String,
}

fn default_port() -> u16 {
    8080
}

impl GatewayConfig {
    /// Load configuration from a YAML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_str(&contents)
    }

    /// Load configuration from a YAML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(Error::missing_field("backend.base_url"));
        }
        if self.backend.api_key.trim().is_empty() {
            return Err(Error::missing_field("backend.api_key"));
        }
        if self.server.public_origin.trim().is_empty() {
            return Err(Error::missing_field("server.public_origin"));
        }
        // Both must be absolute URLs; a bad origin would poison every redirect.
        url::Url::parse(&self.backend.base_url)?;
        url::Url::parse(&self.server.public_origin)?;
        Ok(())
    }
}
