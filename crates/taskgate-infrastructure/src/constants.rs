//! Infrastructure layer constants
//!
//! Defaults and limits for configuration, logging and credentials.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "taskgate.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "taskgate";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TASKGATE";

/// Separator between prefix and nested keys, e.g. `TASKGATE__AUTH__JWT__SECRET`
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default prefix for entity routes
pub const DEFAULT_API_BASE_PATH: &str = "/api";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// JWT default expiration time in seconds (1 hour)
pub const JWT_DEFAULT_EXPIRATION_SECS: u64 = 3600;

/// Minimum accepted length of the JWT signing secret
pub const JWT_MIN_SECRET_LENGTH: usize = 32;

/// Default bcrypt cost factor
pub const BCRYPT_DEFAULT_COST: u32 = 10;

/// Lowest bcrypt cost accepted by the bcrypt crate
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest bcrypt cost accepted by the bcrypt crate
pub const BCRYPT_MAX_COST: u32 = 31;

/// Prefix of bcrypt hashes (`$2a$`, `$2b$`, `$2y$`)
pub const BCRYPT_HASH_PREFIX: &str = "$2";

/// Prefix of Argon2 PHC strings
pub const ARGON2_HASH_PREFIX: &str = "$argon2";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "TASKGATE_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "taskgate";
