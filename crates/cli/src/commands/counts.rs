//! `realty counts` - row totals.

use realty_db::PgStore;
use realty_db::services::count_records;

use crate::error::CommandError;
use crate::output::print_json;

/// Count the listing tables and print the totals.
pub async fn run(store: &PgStore) -> Result<(), CommandError> {
    let counts = count_records(store).await?;
    print_json(&counts)
}
