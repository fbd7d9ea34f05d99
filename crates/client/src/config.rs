//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ESTOCA_API_URL` - Base URL of the EstocaAI backend
//!   (default: the hosted instance)
//!
//! The API token is a credential, not configuration; see
//! [`crate::AuthToken`].

use thiserror::Error;
use url::Url;

/// Default backend instance.
const DEFAULT_API_URL: &str = "https://estocaai-0a5bc1c57b9e.herokuapp.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// EstocaAI backend configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend.
    pub base_url: Url,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `ESTOCA_API_URL` is set but is not a valid
    /// URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = std::env::var("ESTOCA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        Self::with_base_url(&raw).map_err(|e| {
            ConfigError::InvalidEnvVar("ESTOCA_API_URL".to_owned(), e.to_string())
        })
    }

    /// Build a configuration for an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if `base_url` is not a URL that
    /// can serve as a base.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(
                "URL cannot be a base".to_owned(),
            ));
        }
        Ok(Self { base_url })
    }
}
