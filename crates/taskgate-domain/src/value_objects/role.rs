//! User roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access role, ordered from least to most privileged
///
/// The derived `Ord` follows declaration order, so `Role::User < Role::Admin`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular registered user
    #[default]
    User,
    /// Administrator
    Admin,
}

impl Role {
    /// Whether this role meets or exceeds `required`
    pub fn satisfies(self, required: Role) -> bool {
        self >= required
    }

    /// Lowercase name as used in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}
