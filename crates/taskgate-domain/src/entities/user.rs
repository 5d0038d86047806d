//! User entity

use crate::value_objects::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Unique login email
    pub email: String,
    /// One-way hash of the password (bcrypt or Argon2id PHC string)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Access role
    pub role: Role,
    /// When the user was created
    pub created_at: DateTime<Utc>,
}

/// User data before the repository assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Unique login email
    pub email: String,
    /// Already-hashed password
    pub password_hash: String,
    /// Access role
    pub role: Role,
}

impl NewUser {
    /// Create a regular user registration
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::User,
        }
    }

    /// Override the role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
