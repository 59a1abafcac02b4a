//! Webhook payload configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PERSIMMON_BASE_URL` - Public URL of the storefront, used to build
//!   absolute URLs for media files referenced in payloads

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Configuration for payload generation.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Public base URL media paths resolve against.
    pub base_url: Url,
}

impl WebhookConfig {
    /// Create a config with an explicit base URL.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `PERSIMMON_BASE_URL` is missing or not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw = std::env::var("PERSIMMON_BASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("PERSIMMON_BASE_URL".to_string()))?;
        let base_url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidEnvVar("PERSIMMON_BASE_URL".to_string(), e.to_string()))?;

        Ok(Self { base_url })
    }
}

/// Resolve a storage path into an absolute URL.
///
/// Paths that are already absolute URLs pass through untouched.
#[must_use]
pub fn build_absolute_uri(config: &WebhookConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    config
        .base_url
        .join(path)
        .map_or_else(|_| path.to_string(), |u| u.to_string())
}
