//! Maintenance operations over the listing database.
//!
//! Each operation is a free function generic over [`ListingStore`], so it
//! runs the same against [`PgStore`](crate::PgStore) and an in-memory store
//! in tests.

pub mod counts;
pub mod inspector;
pub mod mapper;
pub mod promoter;

use realty_core::{Email, UserRole};

use crate::models::{
    PromotedUser, PropertyMapping, PropertyWithAgent, PropertyWithImages, RecordCounts,
    UserMapping,
};
use crate::repo::RepositoryError;

pub use counts::count_records;
pub use inspector::{Include, InspectedProperties, InspectionReport, inspect};
pub use mapper::{MappingReport, check_mappings};
pub use promoter::promote;

/// The queries the maintenance operations need from storage.
pub trait ListingStore: Send + Sync {
    /// Total number of listings.
    fn count_properties(&self) -> impl Future<Output = Result<u64, RepositoryError>> + Send;

    /// Every listing joined with its agent.
    fn properties_with_agents(
        &self,
    ) -> impl Future<Output = Result<Vec<PropertyWithAgent>, RepositoryError>> + Send;

    /// Every listing with its images.
    fn properties_with_images(
        &self,
    ) -> impl Future<Output = Result<Vec<PropertyWithImages>, RepositoryError>> + Send;

    /// `title` / `agentId` of every listing.
    fn property_mappings(
        &self,
    ) -> impl Future<Output = Result<Vec<PropertyMapping>, RepositoryError>> + Send;

    /// `id` / `name` / `email` of every user.
    fn user_mappings(
        &self,
    ) -> impl Future<Output = Result<Vec<UserMapping>, RepositoryError>> + Send;

    /// Set the role of the user with `email`; `None` when no user matched.
    fn set_role_by_email(
        &self,
        email: &Email,
        role: UserRole,
    ) -> impl Future<Output = Result<Option<PromotedUser>, RepositoryError>> + Send;

    /// Row totals for listings, users and inquiries.
    fn record_counts(&self) -> impl Future<Output = Result<RecordCounts, RepositoryError>> + Send;
}
