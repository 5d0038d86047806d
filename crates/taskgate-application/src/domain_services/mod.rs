//! Domain services

pub mod access_policy;
pub mod deletion_guard;

pub use access_policy::{AccessPolicy, default_rules};
pub use deletion_guard::DeletionGuard;
