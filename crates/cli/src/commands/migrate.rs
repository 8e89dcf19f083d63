//! `realty migrate` - apply the schema migrations.
//!
//! Migrations live in `crates/db/migrations/` and are embedded at build time.
//!
//! Example migration structure:
//! ```text
//! migrations/
//! ├── 20260101000001_create_users.sql
//! ├── 20260101000002_create_properties.sql
//! └── 20260101000003_create_inquiries.sql
//! ```

use realty_db::{PgStore, run_migrations};

use crate::error::CommandError;

/// Run all pending migrations.
pub async fn run(store: &PgStore) -> Result<(), CommandError> {
    tracing::info!("Running migrations...");
    run_migrations(store.pool()).await?;
    tracing::info!("Migrations complete!");
    Ok(())
}
