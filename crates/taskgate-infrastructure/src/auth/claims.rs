//! JWT claims structure
//!
//! Only the subject and the validity window travel in the token. Email and
//! role are read from the user record on every request.

use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at, Unix seconds
    pub iat: u64,
    /// Expiration, Unix seconds
    pub exp: u64,
}

impl Claims {
    /// Claims for `subject` issued at `now`
    pub fn new(subject: impl Into<String>, now: u64, validity_secs: u64) -> Self {
        Self {
            sub: subject.into(),
            iat: now,
            exp: now.saturating_add(validity_secs),
        }
    }

    /// Whether the token is expired at `now`
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.exp
    }
}
