//! Table totals.

use tracing::info;

use super::ListingStore;
use crate::models::RecordCounts;
use crate::repo::RepositoryError;

/// Count listings, users and inquiries.
///
/// # Errors
///
/// Returns the first `RepositoryError` raised by a count query.
pub async fn count_records<S: ListingStore>(store: &S) -> Result<RecordCounts, RepositoryError> {
    let counts = store.record_counts().await?;
    info!(
        properties = counts.properties,
        users = counts.users,
        inquiries = counts.inquiries,
        "Counted records"
    );
    Ok(counts)
}
