use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::ConfigError;

/// Default address of the recommendation service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Default cap on response body size.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Settings persisted in `config.toml`.
///
/// Config keys (TOML): `api.base_url`, `api.request_timeout_secs`,
/// `api.max_response_bytes`, `features.weights_panel`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub features: FeatureFlags,
}

/// Connection settings for the remote recommendation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base address every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional whole-request timeout; absent means requests never time out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Largest response body accepted from the service.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

impl ApiSettings {
    /// Request timeout as a [`Duration`], if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Parse the base URL, rejecting anything that is not absolute http(s).
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: self.base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme `{other}`"))),
        }
    }
}

/// Optional UI features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Show the weight configuration panel.
    #[serde(default = "default_true")]
    pub weights_panel: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            weights_panel: true,
        }
    }
}

impl AppSettings {
    /// Clean up values that deserialize fine but are unusable as-is.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api.base_url.trim().trim_end_matches('/');
        self.api.base_url = if trimmed.is_empty() {
            default_base_url()
        } else {
            trimmed.to_string()
        };
        if self.api.max_response_bytes == 0 {
            self.api.max_response_bytes = default_max_response_bytes();
        }
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

fn default_true() -> bool {
    true
}
