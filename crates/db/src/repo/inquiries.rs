//! Inquiry repository. Only totals are read here.

use sqlx::PgPool;

use super::{RepositoryError, to_count};

/// Repository for buyer inquiries.
pub struct InquiryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InquiryRepository<'a> {
    /// Create a new inquiry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count all inquiries.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inquiries")
            .fetch_one(self.pool)
            .await?;

        to_count(total)
    }
}
