//! `realty promote` - change a user's role by email.
//!
//! Prints `{ "name", "role" }` for the updated user, or `null` when no user
//! has the email. The latter still exits successfully.

use realty_core::{Email, UserRole};
use realty_db::PgStore;
use realty_db::services::promote;

use crate::error::CommandError;
use crate::output::print_json;

/// Apply the role change and print the outcome.
pub async fn run(store: &PgStore, email: &Email, role: UserRole) -> Result<(), CommandError> {
    let promoted = promote(store, email, role).await?;
    print_json(&promoted)
}
