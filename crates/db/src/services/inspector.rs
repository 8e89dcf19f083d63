//! Listing inspection: count the listings, then dump them with a relation.

use serde::Serialize;
use tracing::{info, warn};

use super::ListingStore;
use crate::models::{PropertyWithAgent, PropertyWithImages};
use crate::repo::RepositoryError;

/// Which relation to join onto each listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Include {
    /// The owning agent.
    #[default]
    Agent,
    /// The listing's images.
    Images,
}

/// Listings in the shape selected by [`Include`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InspectedProperties {
    WithAgent(Vec<PropertyWithAgent>),
    WithImages(Vec<PropertyWithImages>),
}

impl InspectedProperties {
    fn empty(include: Include) -> Self {
        match include {
            Include::Agent => Self::WithAgent(Vec::new()),
            Include::Images => Self::WithImages(Vec::new()),
        }
    }

    /// Number of listings held.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::WithAgent(rows) => rows.len(),
            Self::WithImages(rows) => rows.len(),
        }
    }

    /// Whether no listings are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of [`inspect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionReport {
    /// Listing count taken before the detail fetch.
    pub total: u64,
    pub properties: InspectedProperties,
}

/// Count the listings and, if there are any, fetch them with `include` joined.
///
/// The detail query is skipped entirely when the count is zero.
///
/// # Errors
///
/// Returns the first `RepositoryError` raised by either query.
pub async fn inspect<S: ListingStore>(
    store: &S,
    include: Include,
) -> Result<InspectionReport, RepositoryError> {
    let total = store.count_properties().await?;
    info!(total, "Counted properties");

    if total == 0 {
        warn!("No properties found, skipping detail fetch");
        return Ok(InspectionReport {
            total,
            properties: InspectedProperties::empty(include),
        });
    }

    let properties = match include {
        Include::Agent => InspectedProperties::WithAgent(store.properties_with_agents().await?),
        Include::Images => InspectedProperties::WithImages(store.properties_with_images().await?),
    };
    info!(fetched = properties.len(), ?include, "Fetched property details");

    Ok(InspectionReport { total, properties })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use realty_core::{Email, PropertyId, UserId, UserRole};
    use serde_json::json;

    use super::*;
    use crate::models::{AgentSummary, Property, PropertyMapping};
    use crate::services::testing::MemoryStore;

    fn listing(id: i32, title: &str) -> Property {
        Property {
            id: PropertyId::new(id),
            title: title.to_string(),
            price: None,
            location: None,
            agent_id: UserId::new(1),
            created_at: Utc::now(),
        }
    }

    fn seeded_store() -> MemoryStore {
        let agent = AgentSummary {
            id: UserId::new(1),
            name: "Dana".to_string(),
            email: Email::parse("dana@realty.test").unwrap(),
            role: UserRole::Agent,
        };
        MemoryStore {
            with_agents: vec![
                PropertyWithAgent {
                    property: listing(1, "Harbour loft"),
                    agent: agent.clone(),
                },
                PropertyWithAgent {
                    property: listing(2, "Hillside cabin"),
                    agent,
                },
            ],
            with_images: vec![
                PropertyWithImages {
                    property: listing(1, "Harbour loft"),
                    images: Vec::new(),
                },
                PropertyWithImages {
                    property: listing(2, "Hillside cabin"),
                    images: Vec::new(),
                },
            ],
            property_mappings: vec![
                PropertyMapping {
                    title: "Harbour loft".to_string(),
                    agent_id: UserId::new(1),
                },
                PropertyMapping {
                    title: "Hillside cabin".to_string(),
                    agent_id: UserId::new(1),
                },
            ],
            ..MemoryStore::default()
        }
    }

    #[tokio::test]
    async fn test_empty_store_skips_detail_fetch() {
        let store = MemoryStore::default();

        let report = inspect(&store, Include::Agent).await.unwrap();

        assert_eq!(report.total, 0);
        assert!(report.properties.is_empty());
        assert_eq!(store.detail_queries(), 0);
    }

    #[tokio::test]
    async fn test_empty_store_keeps_requested_shape() {
        let store = MemoryStore::default();

        let report = inspect(&store, Include::Images).await.unwrap();

        assert_eq!(store.detail_queries(), 0);
        assert_eq!(report.properties, InspectedProperties::WithImages(Vec::new()));
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "total": 0, "properties": [] })
        );
    }

    #[tokio::test]
    async fn test_fetches_agents_when_populated() {
        let store = seeded_store();

        let report = inspect(&store, Include::Agent).await.unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(store.detail_queries(), 1);
        let InspectedProperties::WithAgent(rows) = report.properties else {
            panic!("expected agent rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].agent.name, "Dana");
    }

    #[tokio::test]
    async fn test_fetches_images_when_requested() {
        let store = seeded_store();

        let report = inspect(&store, Include::Images).await.unwrap();

        assert_eq!(store.detail_queries(), 1);
        assert!(matches!(
            report.properties,
            InspectedProperties::WithImages(ref rows) if rows.len() == 2
        ));
    }

    #[tokio::test]
    async fn test_count_failure_aborts() {
        let store = MemoryStore {
            fail_count: true,
            ..seeded_store()
        };

        let result = inspect(&store, Include::Agent).await;

        assert!(matches!(result, Err(RepositoryError::Database(_))));
        assert_eq!(store.detail_queries(), 0);
    }

    #[tokio::test]
    async fn test_detail_failure_aborts() {
        for include in [Include::Agent, Include::Images] {
            let store = MemoryStore {
                fail_detail: true,
                ..seeded_store()
            };

            let result = inspect(&store, include).await;

            assert!(
                matches!(result, Err(RepositoryError::Database(sqlx::Error::PoolClosed))),
                "{include:?} should fail"
            );
            assert_eq!(store.detail_queries(), 1);
        }
    }
}
