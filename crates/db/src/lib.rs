//! Realty DB - Repositories and maintenance operations for the listing database.
//!
//! # Database
//!
//! ## Tables
//!
//! - `users` - Buyers, agents and administrators (`role` is the `user_role` enum)
//! - `properties` - Listings, each owned by an agent
//! - `property_images` - Ordered image URLs per listing
//! - `inquiries` - Buyer messages about a listing
//!
//! # Migrations
//!
//! Migrations are stored in `crates/db/migrations/` and run via:
//! ```bash
//! cargo run -p realty-cli -- migrate
//! ```
//!
//! # Modules
//!
//! - [`config`] - Connection settings from the environment
//! - [`repo`] - Pool creation and per-table repositories
//! - [`models`] - Domain records returned by the repositories
//! - [`services`] - Inspection, mapping check, role promotion and counts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod models;
pub mod repo;
pub mod services;

pub use config::{ConfigError, DbConfig};
pub use repo::{PgStore, RepositoryError, create_pool, run_migrations};
pub use services::ListingStore;
