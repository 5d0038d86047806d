//! HS256 JWT token service

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use taskgate_domain::error::{Error, Result};
use taskgate_domain::ports::TokenService;
use tracing::trace;

use super::claims::Claims;
use crate::config::JwtConfig;
use crate::error_ext::ErrorContext;

/// Number of dot-separated segments in a compact JWS
const TOKEN_SEGMENTS: usize = 3;

/// Token service signing with a shared secret
///
/// Keys are derived once at construction and never rotated.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity_secs: u64,
}

impl JwtTokenService {
    /// Create a token service from a secret and a validity window
    pub fn new(secret: &str, validity_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller-supplied clock instead
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            validity_secs,
        }
    }

    /// Create a token service from JWT settings
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.expiration_secs)
    }

    /// Validity window in seconds
    pub fn validity_secs(&self) -> u64 {
        self.validity_secs
    }
}

/// Three non-empty segments of base64url characters
fn is_well_formed(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    segments.len() == TOKEN_SEGMENTS
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        })
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: &str, now: u64) -> Result<String> {
        let claims = Claims::new(subject, now, self.validity_secs);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("Token generation failed")
    }

    fn validate(&self, token: &str, now: u64) -> Result<String> {
        if !is_well_formed(token) {
            return Err(Error::TokenMalformed);
        }
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            trace!(error = %e, "Token rejected");
            Error::TokenBadSignature
        })?;
        if data.claims.is_expired_at(now) {
            return Err(Error::TokenExpired);
        }
        Ok(data.claims.sub)
    }
}

impl std::fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("validity_secs", &self.validity_secs)
            .finish_non_exhaustive()
    }
}
