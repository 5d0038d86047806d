//! Server constants

/// Request header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Service name reported by the index route
pub const SERVICE_NAME: &str = "taskgate";
