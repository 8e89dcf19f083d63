//! Property listing types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use realty_core::{Email, Price, PropertyId, PropertyImageId, UserId, UserRole};

/// A property listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    /// Asking price, if the listing has one.
    pub price: Option<Price>,
    pub location: Option<String>,
    /// The agent who owns the listing.
    pub agent_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// The agent fields included when a listing is joined with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
}

/// A listing together with its agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWithAgent {
    #[serde(flatten)]
    pub property: Property,
    pub agent: AgentSummary,
}

/// One image of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub id: PropertyImageId,
    pub property_id: PropertyId,
    pub url: String,
    /// Display order within the listing; lower comes first.
    pub position: i32,
}

/// A listing together with its images, ordered by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWithImages {
    #[serde(flatten)]
    pub property: Property,
    pub images: Vec<PropertyImage>,
}

/// Projection of a listing used to check which agent owns what.
///
/// Serializes to exactly `{ "title", "agentId" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMapping {
    pub title: String,
    pub agent_id: UserId,
}
