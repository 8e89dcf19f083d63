//! User roles.
//!
//! Stored in PostgreSQL as the `user_role` enum with upper-case labels,
//! matching how the web application writes them.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known [`UserRole`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid user role: {0}. Valid roles: ADMIN, AGENT, USER")]
pub struct RoleParseError(pub String);

/// Access level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full access, including user management.
    Admin,
    /// Lists and manages properties.
    Agent,
    /// Browses listings and sends inquiries.
    #[default]
    User,
}

impl UserRole {
    /// Every role, in descending order of privilege.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Agent, Self::User];

    /// The label stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Agent => "AGENT",
            Self::User => "USER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = RoleParseError;

    /// Case-insensitive, so `admin` on the command line works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RoleParseError(s.to_owned()))
    }
}
