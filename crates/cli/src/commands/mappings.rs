//! `realty mappings` - print listing and user projections.

use realty_db::PgStore;
use realty_db::services::check_mappings;

use crate::error::CommandError;
use crate::output::print_json;

/// Fetch both projections and print them.
pub async fn run(store: &PgStore) -> Result<(), CommandError> {
    let report = check_mappings(store).await?;
    print_json(&report)
}
