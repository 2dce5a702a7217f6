//! Compliance Packet API client configuration.
//!
//! Configuration is passed explicitly by the embedding application —
//! the client never reads the environment at call sites. For apps that
//! do configure through the environment, [`ClientConfig::from_env`] is
//! the one sanctioned place where variables are read.

use url::Url;

/// Default base URL for a locally running Compliance Packet API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Configuration for connecting to the Compliance Packet API.
///
/// Custom `Debug` implementation redacts the `api_key` field to
/// prevent credential leakage in log output.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the API (default: <http://localhost:4000>).
    pub base_url: Url,
    /// Optional default API key used by the keyless call variants
    /// (`check`, `usage`). Registration never sends it.
    pub api_key: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL, with no default
    /// API key.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref();
        let base_url = Url::parse(raw)
            .map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            api_key: None,
        })
    }

    /// Set the default API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `COMPLIANCE_API_URL` (default: `http://localhost:4000`)
    /// - `COMPLIANCE_API_KEY` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("COMPLIANCE_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidUrl("COMPLIANCE_API_URL".to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            api_key: std::env::var("COMPLIANCE_API_KEY").ok(),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is a valid constant"),
            api_key: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
