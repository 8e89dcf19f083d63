//! `realty inspect` - count listings and dump them with a relation.

use realty_db::PgStore;
use realty_db::services::{Include, inspect};

use crate::error::CommandError;
use crate::output::print_json;

/// Run the inspection and print the report.
pub async fn run(store: &PgStore, include: Include) -> Result<(), CommandError> {
    let report = inspect(store, include).await?;
    print_json(&report)
}
