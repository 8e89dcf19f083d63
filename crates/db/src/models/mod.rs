//! Domain records for the listing database.
//!
//! These are built from database rows. Stored emails are passed through as
//! written; prices are checked. They serialize with camelCase keys, which is
//! the shape the web application's API uses.

pub mod property;
pub mod user;

pub use property::{
    AgentSummary, Property, PropertyImage, PropertyMapping, PropertyWithAgent, PropertyWithImages,
};
pub use user::{PromotedUser, RecordCounts, UserMapping};
