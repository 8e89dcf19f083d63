//! Ownership mapping check: which agent id each listing points at, next to
//! the ids of the users that exist.

use serde::Serialize;
use tracing::info;

use super::ListingStore;
use crate::models::{PropertyMapping, UserMapping};
use crate::repo::RepositoryError;

/// Both projections, printed side by side for manual comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingReport {
    pub properties: Vec<PropertyMapping>,
    pub users: Vec<UserMapping>,
}

/// Fetch the `title`/`agentId` projection of listings and the
/// `id`/`name`/`email` projection of users.
///
/// # Errors
///
/// Returns the first `RepositoryError` raised by either query.
pub async fn check_mappings<S: ListingStore>(store: &S) -> Result<MappingReport, RepositoryError> {
    let properties = store.property_mappings().await?;
    let users = store.user_mappings().await?;

    info!(
        properties = properties.len(),
        users = users.len(),
        "Fetched mappings"
    );

    Ok(MappingReport { properties, users })
}
