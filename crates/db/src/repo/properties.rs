//! Property repository.
//!
//! Listings are read-only from this side; the web application creates and
//! edits them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use realty_core::{Email, Price, PropertyId, PropertyImageId, UserId, UserRole};

use super::{RepositoryError, to_count};
use crate::models::{
    AgentSummary, Property, PropertyImage, PropertyMapping, PropertyWithAgent, PropertyWithImages,
};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct PropertyRow {
    id: i32,
    title: String,
    price: Option<Decimal>,
    location: Option<String>,
    agent_id: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<PropertyRow> for Property {
    type Error = RepositoryError;

    fn try_from(row: PropertyRow) -> Result<Self, Self::Error> {
        let price = row.price.map(Price::new).transpose().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price on property {}: {e}", row.id))
        })?;

        Ok(Self {
            id: PropertyId::new(row.id),
            title: row.title,
            price,
            location: row.location,
            agent_id: UserId::new(row.agent_id),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PropertyAgentRow {
    #[sqlx(flatten)]
    property: PropertyRow,
    agent_name: String,
    agent_email: Email,
    agent_role: UserRole,
}

impl TryFrom<PropertyAgentRow> for PropertyWithAgent {
    type Error = RepositoryError;

    fn try_from(row: PropertyAgentRow) -> Result<Self, Self::Error> {
        let property = Property::try_from(row.property)?;

        Ok(Self {
            agent: AgentSummary {
                id: property.agent_id,
                name: row.agent_name,
                email: row.agent_email,
                role: row.agent_role,
            },
            property,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PropertyImageRow {
    id: i32,
    property_id: i32,
    url: String,
    position: i32,
}

impl From<PropertyImageRow> for PropertyImage {
    fn from(row: PropertyImageRow) -> Self {
        Self {
            id: PropertyImageId::new(row.id),
            property_id: PropertyId::new(row.property_id),
            url: row.url,
            position: row.position,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PropertyMappingRow {
    title: String,
    agent_id: i32,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for property listing queries.
pub struct PropertyRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepository<'a> {
    /// Create a new property repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count all listings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(self.pool)
            .await?;

        debug!(total, "Counted properties");
        to_count(total)
    }

    /// Every listing joined with its agent, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row holds invalid data.
    #[instrument(skip(self))]
    pub async fn list_with_agents(&self) -> Result<Vec<PropertyWithAgent>, RepositoryError> {
        let rows = sqlx::query_as::<_, PropertyAgentRow>(
            r"
            SELECT p.id, p.title, p.price, p.location, p.agent_id, p.created_at,
                   u.name AS agent_name,
                   u.email AS agent_email,
                   u.role AS agent_role
            FROM properties p
            JOIN users u ON u.id = p.agent_id
            ORDER BY p.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched properties with agents");
        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Every listing with its images, oldest first.
    ///
    /// Images are ordered by `position`, then by id for ties.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either query fails.
    /// Returns `RepositoryError::DataCorruption` if a row holds invalid data.
    #[instrument(skip(self))]
    pub async fn list_with_images(&self) -> Result<Vec<PropertyWithImages>, RepositoryError> {
        let properties = sqlx::query_as::<_, PropertyRow>(
            r"
            SELECT id, title, price, location, agent_id, created_at
            FROM properties
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let ids: Vec<i32> = properties.iter().map(|row| row.id).collect();
        let image_rows = sqlx::query_as::<_, PropertyImageRow>(
            r"
            SELECT id, property_id, url, position
            FROM property_images
            WHERE property_id = ANY($1)
            ORDER BY property_id, position, id
            ",
        )
        .bind(&ids)
        .fetch_all(self.pool)
        .await?;

        debug!(
            properties = properties.len(),
            images = image_rows.len(),
            "Fetched properties with images"
        );

        let mut images: HashMap<i32, Vec<PropertyImage>> = HashMap::new();
        for row in image_rows {
            images.entry(row.property_id).or_default().push(row.into());
        }

        properties
            .into_iter()
            .map(|row| {
                let images = images.remove(&row.id).unwrap_or_default();
                Ok(PropertyWithImages {
                    property: row.try_into()?,
                    images,
                })
            })
            .collect()
    }

    /// The `title` / `agentId` projection of every listing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_mappings(&self) -> Result<Vec<PropertyMapping>, RepositoryError> {
        let rows = sqlx::query_as::<_, PropertyMappingRow>(
            "SELECT title, agent_id FROM properties ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched property mappings");
        Ok(rows
            .into_iter()
            .map(|row| PropertyMapping {
                title: row.title,
                agent_id: UserId::new(row.agent_id),
            })
            .collect())
    }
}
