//! User account types.

use serde::Serialize;

use realty_core::{Email, UserId, UserRole};

/// Projection of a user used when checking listing ownership.
///
/// Serializes to exactly `{ "id", "name", "email" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMapping {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

/// What a role change reports back: who was changed and their new role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedUser {
    pub name: String,
    pub role: UserRole,
}

/// Row totals across the listing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCounts {
    pub properties: u64,
    pub users: u64,
    pub inquiries: u64,
}
