//! Auth Service Use Case
//!
//! Login, per-request identity resolution, and the facade over the access
//! policy and deletion guard that the HTTP layer depends on.

use std::sync::Arc;

use async_trait::async_trait;
use taskgate_domain::constants::BEARER_SCHEME;
use taskgate_domain::error::{Error, Result};
use taskgate_domain::ports::{
    AuthServiceInterface, Clock, CredentialVerifier, TokenService, UserRepository,
};
use taskgate_domain::value_objects::{Decision, DeletableKind, HttpMethod, Principal};
use tracing::{debug, info};

use crate::domain_services::{AccessPolicy, DeletionGuard};

/// Extract the token from an `Authorization` header value
///
/// Accepts `Bearer <token>` with a case-insensitive scheme. Returns `None` for
/// any other scheme, a missing token, or a token containing whitespace.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = rest.trim_start();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}

/// Auth service implementation
pub struct AuthServiceImpl {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
    credentials: Arc<dyn CredentialVerifier>,
    clock: Arc<dyn Clock>,
    policy: AccessPolicy,
    deletion_guard: DeletionGuard,
}

impl AuthServiceImpl {
    /// Create a new auth service with injected dependencies
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenService>,
        credentials: Arc<dyn CredentialVerifier>,
        clock: Arc<dyn Clock>,
        policy: AccessPolicy,
        deletion_guard: DeletionGuard,
    ) -> Self {
        Self {
            users,
            tokens,
            credentials,
            clock,
            policy,
            deletion_guard,
        }
    }

    /// Access policy in use
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Hash a password with the configured verifier
    pub fn hash_password(&self, secret: &str) -> Result<String> {
        self.credentials.hash(secret)
    }

    async fn authenticate(&self, token: &str) -> Result<Principal> {
        let subject = self.tokens.validate(token, self.clock.now())?;
        let user_id: i64 = subject
            .parse()
            .map_err(|_| Error::subject_not_found(subject.as_str()))?;
        let user = self
            .users
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| Error::subject_not_found(subject.as_str()))?;
        Ok(Principal::authenticated(user.id, user.email, user.role))
    }
}

#[async_trait]
impl AuthServiceInterface for AuthServiceImpl {
    async fn issue_token(&self, email: &str, secret: &str) -> Result<String> {
        let user = self
            .users
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| Error::subject_not_found(email))?;

        if !self.credentials.verify(secret, &user.password_hash)? {
            debug!(user_id = user.id, "Password mismatch");
            return Err(Error::CredentialMismatch);
        }

        let token = self.tokens.issue(&user.id.to_string(), self.clock.now())?;
        info!(user_id = user.id, "User logged in");
        Ok(token)
    }

    async fn resolve_identity(&self, authorization: Option<&str>) -> Principal {
        let Some(header) = authorization else {
            return Principal::Anonymous;
        };
        let Some(token) = bearer_token(header) else {
            debug!("Ignoring non-bearer Authorization header");
            return Principal::Anonymous;
        };
        match self.authenticate(token).await {
            Ok(principal) => principal,
            Err(e) => {
                debug!(error = %e, "Token rejected, treating caller as anonymous");
                Principal::Anonymous
            }
        }
    }

    async fn decide(
        &self,
        principal: &Principal,
        method: HttpMethod,
        path: &str,
    ) -> Result<Decision> {
        self.policy.decide(principal, method, path).await
    }

    async fn guard_delete(&self, kind: DeletableKind, id: i64) -> Result<()> {
        self.deletion_guard.guard(kind, id).await
    }
}
