//! Configuration for the Warden API service.

use std::time::Duration;

use warden_core::AuthConfig;

/// Service configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Auth core configuration (signing key, token TTL)
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing or too-short signing secret is fatal: the process must not
    /// start without a usable key.
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        let signing_secret = std::env::var("WARDEN_SIGNING_SECRET")
            .map_err(|_| ConfigError::Missing("WARDEN_SIGNING_SECRET"))?;

        let token_ttl_secs: u64 = std::env::var("WARDEN_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "28800".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("WARDEN_TOKEN_TTL_SECS"))?;

        let auth = AuthConfig::try_new(&signing_secret)
            .map_err(|e| ConfigError::AuthConfig(e.to_string()))?
            .with_token_ttl(Duration::from_secs(token_ttl_secs));

        Ok(Self { http_port, auth })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    AuthConfig(String),
}
