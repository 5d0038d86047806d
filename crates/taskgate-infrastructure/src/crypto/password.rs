//! Password hashing with bcrypt and Argon2id
//!
//! Stored hashes are self-describing, so verification picks the algorithm
//! from the hash prefix. New hashes use the configured algorithm.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{self, PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng},
};
use taskgate_domain::error::{Error, Result};
use taskgate_domain::ports::CredentialVerifier;

use crate::config::{AuthConfig, PasswordAlgorithm};
use crate::constants::{ARGON2_HASH_PREFIX, BCRYPT_HASH_PREFIX};
use crate::error_ext::ErrorContext;

/// Password hashing service
#[derive(Clone)]
pub struct PasswordService {
    algorithm: PasswordAlgorithm,
    bcrypt_cost: u32,
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a password service hashing with `algorithm`
    pub fn new(algorithm: PasswordAlgorithm, bcrypt_cost: u32) -> Self {
        Self {
            algorithm,
            bcrypt_cost,
            argon2: Argon2::default(),
        }
    }

    /// Create a password service from authentication settings
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.password_algorithm, config.bcrypt_cost)
    }

    fn verify_argon2(&self, secret: &str, stored_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| Error::corrupt_credential(format!("Invalid Argon2 hash: {e}")))?;
        if parsed.salt.is_none() || parsed.hash.is_none() {
            return Err(Error::corrupt_credential("Argon2 hash is missing salt or output"));
        }
        match self.argon2.verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(Error::corrupt_credential(format!(
                "Unusable Argon2 hash: {e}"
            ))),
        }
    }

    fn verify_bcrypt(secret: &str, stored_hash: &str) -> Result<bool> {
        bcrypt::verify(secret, stored_hash)
            .map_err(|e| Error::corrupt_credential(format!("Invalid bcrypt hash: {e}")))
    }
}

impl CredentialVerifier for PasswordService {
    fn verify(&self, secret: &str, stored_hash: &str) -> Result<bool> {
        if stored_hash.is_empty() {
            return Err(Error::corrupt_credential("Empty password hash"));
        }
        if stored_hash.starts_with(ARGON2_HASH_PREFIX) {
            self.verify_argon2(secret, stored_hash)
        } else if stored_hash.starts_with(BCRYPT_HASH_PREFIX) {
            Self::verify_bcrypt(secret, stored_hash)
        } else {
            Err(Error::corrupt_credential("Unknown password hash format"))
        }
    }

    fn hash(&self, secret: &str) -> Result<String> {
        match self.algorithm {
            PasswordAlgorithm::Bcrypt => bcrypt::hash(secret, self.bcrypt_cost)
                .with_context(|| format!("bcrypt hashing at cost {} failed", self.bcrypt_cost)),
            PasswordAlgorithm::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                self.argon2
                    .hash_password(secret.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| Error::internal(format!("Password hashing failed: {e}")))
            }
        }
    }
}

impl std::fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordService")
            .field("algorithm", &self.algorithm)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}
