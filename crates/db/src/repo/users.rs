//! User repository.

use sqlx::PgPool;
use tracing::{debug, instrument};

use realty_core::{Email, UserId, UserRole};

use super::{RepositoryError, to_count};
use crate::models::{PromotedUser, UserMapping};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct UserMappingRow {
    id: i32,
    name: String,
    email: Email,
}

impl From<UserMappingRow> for UserMapping {
    fn from(row: UserMappingRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PromotedRow {
    name: String,
    role: UserRole,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for user account queries.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count all users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;

        to_count(total)
    }

    /// The `id` / `name` / `email` projection of every user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_mappings(&self) -> Result<Vec<UserMapping>, RepositoryError> {
        let rows =
            sqlx::query_as::<_, UserMappingRow>("SELECT id, name, email FROM users ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        debug!(count = rows.len(), "Fetched user mappings");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Set the role of the user with the given email.
    ///
    /// Only the `role` column of the matching row is written. Returns `None`
    /// when no user has that email; nothing is inserted in that case.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    #[instrument(skip(self), fields(email = %email, role = %role))]
    pub async fn set_role_by_email(
        &self,
        email: &Email,
        role: UserRole,
    ) -> Result<Option<PromotedUser>, RepositoryError> {
        let row = sqlx::query_as::<_, PromotedRow>(
            r"
            UPDATE users
            SET role = $1
            WHERE email = $2
            RETURNING name, role
            ",
        )
        .bind(role)
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        debug!(matched = row.is_some(), "Updated user role");
        Ok(row.map(|row| PromotedUser {
            name: row.name,
            role: row.role,
        }))
    }
}
