//! Configuration module - environment variable parsing

use std::env;

/// Application configuration, constructed once in `main` and passed down
/// explicitly. No global singletons.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,
    /// Maximum connections held by the pool
    pub max_connections: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("STOREFRONT_API_PORT").or_else(|_| env::var("PORT")) {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v))?,
            Err(_) => 3000,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            port,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}
