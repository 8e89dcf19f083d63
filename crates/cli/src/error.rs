//! CLI error type.

use thiserror::Error;

use realty_db::{ConfigError, RepositoryError};

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Environment configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The database could not be reached.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// A query or migration failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The result could not be written as JSON.
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}
