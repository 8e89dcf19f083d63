//! Core types for Realty.
//!
//! This module provides type-safe wrappers for the listing domain.

pub mod email;
pub mod id;
pub mod price;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError};
pub use role::{RoleParseError, UserRole};
