//! Authentication Service Ports
//!
//! Contracts for token issuing and validation, password hashing, wall-clock
//! time and the request-facing auth service.

use crate::error::Result;
use crate::value_objects::{Decision, DeletableKind, HttpMethod, Principal};
use async_trait::async_trait;

/// Signed, time-bounded identity tokens
///
/// Implementations are pure: no lookups, no mutation. `now` is Unix seconds
/// supplied by the caller so expiry is testable.
pub trait TokenService: Send + Sync {
    /// Issue a token for `subject` valid from `now` for the configured window
    fn issue(&self, subject: &str, now: u64) -> Result<String>;

    /// Validate a token and return its subject
    ///
    /// Fails with `TokenMalformed`, `TokenBadSignature` or `TokenExpired`.
    fn validate(&self, token: &str, now: u64) -> Result<String>;
}

/// One-way password hashing
pub trait CredentialVerifier: Send + Sync {
    /// Compare a submitted secret with a stored hash
    ///
    /// `Ok(false)` on mismatch. `Err(CorruptCredentialRecord)` only when the
    /// stored hash cannot be interpreted.
    fn verify(&self, secret: &str, stored_hash: &str) -> Result<bool>;

    /// Hash a secret for storage
    fn hash(&self, secret: &str) -> Result<String>;
}

/// Source of the current time in Unix seconds
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch
    fn now(&self) -> u64;
}

/// Auth service interface consumed by the HTTP layer
#[async_trait]
pub trait AuthServiceInterface: Send + Sync {
    /// Exchange email and password for a signed token
    async fn issue_token(&self, email: &str, secret: &str) -> Result<String>;

    /// Resolve the caller from the raw `Authorization` header value
    ///
    /// Never fails: every problem degrades to [`Principal::Anonymous`].
    async fn resolve_identity(&self, authorization: Option<&str>) -> Principal;

    /// Decide whether `principal` may perform `method` on `path`
    async fn decide(
        &self,
        principal: &Principal,
        method: HttpMethod,
        path: &str,
    ) -> Result<Decision>;

    /// Refuse deletion while tasks still reference the entity
    async fn guard_delete(&self, kind: DeletableKind, id: i64) -> Result<()>;
}
