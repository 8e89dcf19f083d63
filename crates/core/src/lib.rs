//! Realty Core - Shared types library.
//!
//! This crate provides the value types shared by the Realty components:
//! - `db` - Repositories and maintenance operations over the listing database
//! - `cli` - Command-line front-end for inspection and role management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. The
//! optional `postgres` feature adds `sqlx` encode/decode support so the
//! types can be bound directly in queries.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices and user roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
