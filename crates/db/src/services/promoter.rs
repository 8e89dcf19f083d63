//! Role promotion by email.

use tracing::{info, warn};

use realty_core::{Email, UserRole};

use super::ListingStore;
use crate::models::PromotedUser;
use crate::repo::RepositoryError;

/// Give the user with `email` the role `role`.
///
/// An email that matches no user is not an error: it is logged and `None`
/// is returned, and no row is created.
///
/// # Errors
///
/// Returns `RepositoryError` if the update itself fails.
pub async fn promote<S: ListingStore>(
    store: &S,
    email: &Email,
    role: UserRole,
) -> Result<Option<PromotedUser>, RepositoryError> {
    info!(%email, %role, "Updating user role");

    let promoted = store.set_role_by_email(email, role).await?;
    match &promoted {
        Some(user) => info!(name = %user.name, role = %user.role, "User role updated"),
        None => warn!(%email, "No user with this email, nothing updated"),
    }

    Ok(promoted)
}
