//! Subcommand implementations.
//!
//! # Environment Variables
//!
//! - `REALTY_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string
//! - `REALTY_DB_MAX_CONNECTIONS` - Pool size (default: 1)
//! - `REALTY_DB_ACQUIRE_TIMEOUT_SECS` - Connection wait (default: 10)

pub mod counts;
pub mod inspect;
pub mod mappings;
pub mod migrate;
pub mod promote;

use realty_db::{DbConfig, PgStore, create_pool};

use crate::error::CommandError;

/// Load configuration and open the pool every command shares.
pub async fn connect() -> Result<PgStore, CommandError> {
    let config = DbConfig::from_env()?;
    let host = config.database_host();

    tracing::info!(
        host = host.as_deref().unwrap_or("unknown"),
        "Connecting to database..."
    );
    let pool = create_pool(&config).await?;

    Ok(PgStore::new(pool))
}
