//! Resolved caller identity

use super::role::Role;
use serde::Serialize;

/// The caller of one request
///
/// Built fresh for every request from a validated token and the current user
/// record. Never persisted and never shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    /// No valid credentials were presented
    #[default]
    Anonymous,
    /// Token validated and its subject still exists
    Authenticated {
        /// User ID
        user_id: i64,
        /// User email at resolution time
        email: String,
        /// User role at resolution time
        role: Role,
    },
}

impl Principal {
    /// Create an authenticated principal
    pub fn authenticated(user_id: i64, email: impl Into<String>, role: Role) -> Self {
        Self::Authenticated {
            user_id,
            email: email.into(),
            role,
        }
    }

    /// Whether credentials were accepted
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// User ID, if authenticated
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Self::Authenticated { user_id, .. } => Some(*user_id),
            Self::Anonymous => None,
        }
    }

    /// Email, if authenticated
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Authenticated { email, .. } => Some(email),
            Self::Anonymous => None,
        }
    }

    /// Role, if authenticated
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Authenticated { role, .. } => Some(*role),
            Self::Anonymous => None,
        }
    }
}
