//! Domain layer constants
//!
//! Values that are part of the access-control contract itself rather than
//! deployment configuration. Tunables live in the infrastructure crate.

/// Scheme prefix expected in the `Authorization` header
pub const BEARER_SCHEME: &str = "Bearer";

/// Path wildcard matching exactly one segment
pub const PATH_WILDCARD: &str = "*";

/// Reason suffix used when a deletion is blocked by dependent tasks
pub const ASSOCIATED_TASKS_SUFFIX: &str = "has associated tasks";
