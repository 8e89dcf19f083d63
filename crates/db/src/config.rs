//! Database configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `REALTY_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `REALTY_DB_MAX_CONNECTIONS` - Pool size (default: 1)
//! - `REALTY_DB_ACQUIRE_TIMEOUT_SECS` - Seconds to wait for a connection (default: 10)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DATABASE_URL_KEY: &str = "REALTY_DATABASE_URL";
const FALLBACK_DATABASE_URL_KEY: &str = "DATABASE_URL";
const MAX_CONNECTIONS_KEY: &str = "REALTY_DB_MAX_CONNECTIONS";
const ACQUIRE_TIMEOUT_KEY: &str = "REALTY_DB_ACQUIRE_TIMEOUT_SECS";

const DEFAULT_MAX_CONNECTIONS: u32 = 1;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the listing database.
///
/// Implements `Debug` manually so the connection string (which carries the
/// password) never reaches the logs.
#[derive(Clone)]
pub struct DbConfig {
    /// `PostgreSQL` connection URL
    pub database_url: SecretString,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// How long to wait for a free connection
    pub acquire_timeout: Duration,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the database URL is missing or not a
    /// `postgres://` URL, or if an optional setting does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_KEY)
            .or_else(|| lookup(FALLBACK_DATABASE_URL_KEY))
            .ok_or_else(|| ConfigError::MissingEnvVar(DATABASE_URL_KEY.to_string()))?;
        validate_database_url(&database_url)?;

        let max_connections = match lookup(MAX_CONNECTIONS_KEY) {
            Some(raw) => parse_max_connections(&raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_timeout_secs = match lookup(ACQUIRE_TIMEOUT_KEY) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar(ACQUIRE_TIMEOUT_KEY.to_string(), e.to_string())
            })?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: SecretString::from(database_url),
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    /// Host portion of the connection URL, safe to log.
    #[must_use]
    pub fn database_host(&self) -> Option<String> {
        Url::parse(self.database_url.expose_secret())
            .ok()
            .and_then(|url| url.host_str().map(ToOwned::to_owned))
    }
}

fn validate_database_url(raw: &str) -> Result<(), ConfigError> {
    // Never echo the URL itself in the error: it may contain a password
    let url = Url::parse(raw).map_err(|e| {
        ConfigError::InvalidEnvVar(DATABASE_URL_KEY.to_string(), e.to_string())
    })?;

    match url.scheme() {
        "postgres" | "postgresql" => Ok(()),
        other => Err(ConfigError::InvalidEnvVar(
            DATABASE_URL_KEY.to_string(),
            format!("unsupported scheme '{other}', expected postgres://"),
        )),
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    let value = raw.trim().parse::<u32>().map_err(|e| {
        ConfigError::InvalidEnvVar(MAX_CONNECTIONS_KEY.to_string(), e.to_string())
    })?;
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar(
            MAX_CONNECTIONS_KEY.to_string(),
            "must be at least 1".to_string(),
        ));
    }
    Ok(value)
}
