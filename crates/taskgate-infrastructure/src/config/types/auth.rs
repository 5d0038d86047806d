//! Authentication configuration types

use serde::{Deserialize, Serialize};
use taskgate_domain::AccessRule;

use crate::constants::{BCRYPT_DEFAULT_COST, JWT_DEFAULT_EXPIRATION_SECS};

/// Password hashing algorithms used for new hashes
///
/// Verification accepts either format regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    #[default]
    Bcrypt,
    Argon2,
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 signing secret
    ///
    /// **REQUIRED**. Configure via `TASKGATE__AUTH__JWT__SECRET` or
    /// `auth.jwt.secret` in the config file. At least 32 characters.
    pub secret: String,

    /// Token validity window in seconds
    pub expiration_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            // Empty by default; the loader rejects it
            secret: String::new(),
            expiration_secs: JWT_DEFAULT_EXPIRATION_SECS,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Algorithm for newly hashed passwords
    pub password_algorithm: PasswordAlgorithm,

    /// bcrypt cost factor
    pub bcrypt_cost: u32,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Extra access rules evaluated before the built-in table
    #[serde(default)]
    pub rules: Vec<AccessRule>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_algorithm: PasswordAlgorithm::default(),
            bcrypt_cost: BCRYPT_DEFAULT_COST,
            jwt: JwtConfig::default(),
            rules: Vec::new(),
        }
    }
}
