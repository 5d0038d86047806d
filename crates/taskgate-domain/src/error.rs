//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for taskgate
#[derive(Error, Debug)]
pub enum Error {
    /// Submitted secret does not match the stored hash
    #[error("Invalid credentials provided")]
    CredentialMismatch,

    /// Stored password hash cannot be parsed
    #[error("Corrupt credential record: {message}")]
    CorruptCredentialRecord {
        /// Description of the parse failure
        message: String,
    },

    /// Token cannot be parsed at all
    #[error("Malformed token")]
    TokenMalformed,

    /// Token was not signed with the current server secret
    #[error("Token signature mismatch")]
    TokenBadSignature,

    /// Token is at or past its expiry instant
    #[error("Token has expired")]
    TokenExpired,

    /// Login or token subject refers to no existing user
    #[error("Subject not found: {subject}")]
    SubjectNotFound {
        /// The email or user id that could not be resolved
        subject: String,
    },

    /// Access rule denied the request
    #[error("Access denied")]
    AuthorizationDenied,

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Deletion refused because dependent records still exist
    #[error("{reason}")]
    DeletionBlocked {
        /// Human-readable reason, e.g. "Label has associated tasks"
        reason: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Database-related error
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a subject not found error
    pub fn subject_not_found<S: Into<String>>(subject: S) -> Self {
        Self::SubjectNotFound {
            subject: subject.into(),
        }
    }

    /// Create a deletion blocked error
    pub fn deletion_blocked<S: Into<String>>(reason: S) -> Self {
        Self::DeletionBlocked {
            reason: reason.into(),
        }
    }

    /// Create a corrupt credential record error
    pub fn corrupt_credential<S: Into<String>>(message: S) -> Self {
        Self::CorruptCredentialRecord {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Database error creation methods
impl Error {
    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }
}

// Classification used by the transport layer
impl Error {
    /// Login failures that surface as 401
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::CredentialMismatch | Self::SubjectNotFound { .. }
        )
    }

    /// Token validation failures
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            Self::TokenMalformed | Self::TokenBadSignature | Self::TokenExpired
        )
    }
}
