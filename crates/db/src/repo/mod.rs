//! `PostgreSQL` access for the listing database.
//!
//! Each table gets a borrowed repository over a shared `PgPool`. [`PgStore`]
//! owns the pool and implements [`ListingStore`](crate::ListingStore) by
//! delegating to the repositories.

pub mod inquiries;
pub mod properties;
pub mod users;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use secrecy::ExposeSecret;

use realty_core::{Email, UserRole};

use crate::config::DbConfig;
use crate::models::{
    PromotedUser, PropertyMapping, PropertyWithAgent, PropertyWithImages, RecordCounts,
    UserMapping,
};
use crate::services::ListingStore;

pub use inquiries::InquiryRepository;
pub use properties::PropertyRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// A schema migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create a `PostgreSQL` connection pool from the loaded configuration.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(0)
        .acquire_timeout(config.acquire_timeout)
        .connect(config.database_url.expose_secret())
        .await
}

/// Apply the embedded migrations in `crates/db/migrations/`.
///
/// # Errors
///
/// Returns `RepositoryError::Migration` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Convert a `COUNT(*)` result into an unsigned total.
fn to_count(raw: i64) -> Result<u64, RepositoryError> {
    u64::try_from(raw)
        .map_err(|_| RepositoryError::DataCorruption(format!("negative row count: {raw}")))
}

/// Database-backed [`ListingStore`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an open pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every connection in the pool and wait for them to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl ListingStore for PgStore {
    async fn count_properties(&self) -> Result<u64, RepositoryError> {
        PropertyRepository::new(&self.pool).count().await
    }

    async fn properties_with_agents(&self) -> Result<Vec<PropertyWithAgent>, RepositoryError> {
        PropertyRepository::new(&self.pool).list_with_agents().await
    }

    async fn properties_with_images(&self) -> Result<Vec<PropertyWithImages>, RepositoryError> {
        PropertyRepository::new(&self.pool).list_with_images().await
    }

    async fn property_mappings(&self) -> Result<Vec<PropertyMapping>, RepositoryError> {
        PropertyRepository::new(&self.pool).list_mappings().await
    }

    async fn user_mappings(&self) -> Result<Vec<UserMapping>, RepositoryError> {
        UserRepository::new(&self.pool).list_mappings().await
    }

    async fn set_role_by_email(
        &self,
        email: &Email,
        role: UserRole,
    ) -> Result<Option<PromotedUser>, RepositoryError> {
        UserRepository::new(&self.pool)
            .set_role_by_email(email, role)
            .await
    }

    async fn record_counts(&self) -> Result<RecordCounts, RepositoryError> {
        Ok(RecordCounts {
            properties: PropertyRepository::new(&self.pool).count().await?,
            users: UserRepository::new(&self.pool).count().await?,
            inquiries: InquiryRepository::new(&self.pool).count().await?,
        })
    }
}
