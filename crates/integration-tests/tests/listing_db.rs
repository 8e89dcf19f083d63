//! Database integration tests for the maintenance operations.
//!
//! These tests require a `PostgreSQL` server reachable through `DATABASE_URL`.
//! `#[sqlx::test]` creates a fresh database per test and applies the
//! migrations from `crates/db/migrations/`.
//!
//! Run with: cargo test -p realty-integration-tests -- --include-ignored

use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;

use realty_core::{Email, UserRole};
use realty_db::PgStore;
use realty_db::repo::PropertyRepository;
use realty_db::services::{
    Include, InspectedProperties, check_mappings, count_records, inspect, promote,
};
use realty_integration_tests::{seed_image, seed_inquiry, seed_property, seed_user, user_roles};

type TestResult = Result<(), Box<dyn std::error::Error>>;

// =============================================================================
// Counting
// =============================================================================

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_count_matches_seeded_rows(pool: PgPool) -> TestResult {
    let repo = PropertyRepository::new(&pool);
    assert_eq!(repo.count().await?, 0);

    let agent = seed_user(&pool, "Dana", "dana@realty.test", UserRole::Agent).await?;
    for title in ["Harbour loft", "Hillside cabin", "Garden flat"] {
        seed_property(&pool, title, agent, None).await?;
    }

    assert_eq!(repo.count().await?, 3);
    Ok(())
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_record_counts(pool: PgPool) -> TestResult {
    let agent = seed_user(&pool, "Dana", "dana@realty.test", UserRole::Agent).await?;
    let buyer = seed_user(&pool, "Sam", "sam@realty.test", UserRole::User).await?;
    let loft = seed_property(&pool, "Harbour loft", agent, None).await?;
    seed_inquiry(&pool, loft, Some(buyer), "Is parking included?").await?;
    seed_inquiry(&pool, loft, None, "Still available?").await?;

    let counts = count_records(&PgStore::new(pool)).await?;

    assert_eq!(counts.properties, 1);
    assert_eq!(counts.users, 2);
    assert_eq!(counts.inquiries, 2);
    Ok(())
}

// =============================================================================
// Inspection
// =============================================================================

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_inspect_empty_database(pool: PgPool) -> TestResult {
    let report = inspect(&PgStore::new(pool), Include::Agent).await?;

    assert_eq!(report.total, 0);
    assert!(report.properties.is_empty());
    Ok(())
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_inspect_joins_agents(pool: PgPool) -> TestResult {
    let dana = seed_user(&pool, "Dana", "dana@realty.test", UserRole::Agent).await?;
    let lee = seed_user(&pool, "Lee", "lee@realty.test", UserRole::Admin).await?;
    seed_property(&pool, "Harbour loft", dana, Some(Decimal::new(52_500_000, 2))).await?;
    seed_property(&pool, "Hillside cabin", lee, None).await?;

    let report = inspect(&PgStore::new(pool), Include::Agent).await?;

    assert_eq!(report.total, 2);
    let InspectedProperties::WithAgent(rows) = report.properties else {
        panic!("expected agent rows");
    };
    let summary: Vec<(&str, &str, UserRole)> = rows
        .iter()
        .map(|row| {
            (
                row.property.title.as_str(),
                row.agent.name.as_str(),
                row.agent.role,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Harbour loft", "Dana", UserRole::Agent),
            ("Hillside cabin", "Lee", UserRole::Admin),
        ]
    );

    let first = serde_json::to_value(&rows[0])?;
    assert_eq!(first["price"], "525000.00");
    assert_eq!(first["agent"]["email"], "dana@realty.test");
    Ok(())
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_inspect_orders_images(pool: PgPool) -> TestResult {
    let agent = seed_user(&pool, "Dana", "dana@realty.test", UserRole::Agent).await?;
    let loft = seed_property(&pool, "Harbour loft", agent, None).await?;
    let cabin = seed_property(&pool, "Hillside cabin", agent, None).await?;
    seed_image(&pool, loft, "https://cdn.realty.test/loft/kitchen.jpg", 2).await?;
    seed_image(&pool, loft, "https://cdn.realty.test/loft/front.jpg", 0).await?;
    seed_image(&pool, loft, "https://cdn.realty.test/loft/lounge.jpg", 1).await?;

    let report = inspect(&PgStore::new(pool), Include::Images).await?;

    let InspectedProperties::WithImages(rows) = report.properties else {
        panic!("expected image rows");
    };
    assert_eq!(rows.len(), 2);

    let loft_row = rows.iter().find(|row| row.property.id == loft).ok_or("loft missing")?;
    let urls: Vec<&str> = loft_row.images.iter().map(|image| image.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://cdn.realty.test/loft/front.jpg",
            "https://cdn.realty.test/loft/lounge.jpg",
            "https://cdn.realty.test/loft/kitchen.jpg",
        ]
    );

    let cabin_row = rows.iter().find(|row| row.property.id == cabin).ok_or("cabin missing")?;
    assert!(cabin_row.images.is_empty());
    Ok(())
}

// =============================================================================
// Mapping check
// =============================================================================

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_mappings_return_only_projected_fields(pool: PgPool) -> TestResult {
    let agent = seed_user(&pool, "Dana", "dana@realty.test", UserRole::Agent).await?;
    seed_property(&pool, "Harbour loft", agent, Some(Decimal::new(1, 0))).await?;

    let report = check_mappings(&PgStore::new(pool)).await?;

    assert_eq!(
        serde_json::to_value(&report)?,
        json!({
            "properties": [{ "title": "Harbour loft", "agentId": agent.as_i32() }],
            "users": [{ "id": agent.as_i32(), "name": "Dana", "email": "dana@realty.test" }],
        })
    );
    Ok(())
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_stored_emails_pass_through_unchanged(pool: PgPool) -> TestResult {
    // Rows written before the web app checked emails
    let padded = seed_user(&pool, "Dana", " Dana@realty.test ", UserRole::Agent).await?;
    let bare = seed_user(&pool, "Root", "admin", UserRole::Admin).await?;
    seed_property(&pool, "Harbour loft", padded, None).await?;
    seed_property(&pool, "Hillside cabin", bare, None).await?;
    let store = PgStore::new(pool);

    let mappings = serde_json::to_value(check_mappings(&store).await?)?;
    assert_eq!(mappings["users"][0]["email"], " Dana@realty.test ");
    assert_eq!(mappings["users"][1]["email"], "admin");

    let report = inspect(&store, Include::Agent).await?;
    let InspectedProperties::WithAgent(rows) = report.properties else {
        panic!("expected agent rows");
    };
    let emails: Vec<&str> = rows.iter().map(|row| row.agent.email.as_str()).collect();
    assert_eq!(emails, vec![" Dana@realty.test ", "admin"]);
    Ok(())
}

// =============================================================================
// Role promotion
// =============================================================================

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_promote_changes_only_target_role(pool: PgPool) -> TestResult {
    seed_user(&pool, "Dana", "dana@realty.test", UserRole::Agent).await?;
    seed_user(&pool, "Sam", "sam@realty.test", UserRole::User).await?;
    seed_user(&pool, "Lee", "lee@realty.test", UserRole::User).await?;

    let before = user_roles(&pool).await?;
    let email = Email::parse("sam@realty.test")?;

    let promoted = promote(&PgStore::new(pool.clone()), &email, UserRole::Admin).await?;
    let promoted = promoted.ok_or("expected a matching user")?;
    assert_eq!(promoted.name, "Sam");
    assert_eq!(promoted.role, UserRole::Admin);

    let after = user_roles(&pool).await?;
    let expected: Vec<_> = before
        .into_iter()
        .map(|(id, stored, role)| {
            let role = if stored == email.as_str() {
                UserRole::Admin
            } else {
                role
            };
            (id, stored, role)
        })
        .collect();
    assert_eq!(after, expected);
    Ok(())
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_promote_unknown_email_creates_nothing(pool: PgPool) -> TestResult {
    let dana = seed_user(&pool, "Dana", "dana@realty.test", UserRole::Agent).await?;
    let email = Email::parse("nobody@realty.test")?;

    let promoted = promote(&PgStore::new(pool.clone()), &email, UserRole::Admin).await?;

    assert!(promoted.is_none());
    assert_eq!(
        user_roles(&pool).await?,
        vec![(dana, "dana@realty.test".to_string(), UserRole::Agent)]
    );
    Ok(())
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_promote_can_demote(pool: PgPool) -> TestResult {
    seed_user(&pool, "Lee", "lee@realty.test", UserRole::Admin).await?;
    let email = Email::parse("lee@realty.test")?;

    let promoted = promote(&PgStore::new(pool), &email, UserRole::Agent).await?;

    assert_eq!(promoted.map(|user| user.role), Some(UserRole::Agent));
    Ok(())
}
