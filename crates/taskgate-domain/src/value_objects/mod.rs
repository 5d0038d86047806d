//! Value objects
//!
//! Immutable values describing who is calling and what they may do.

mod access;
mod kinds;
mod principal;
mod role;

pub use access::{AccessRule, Decision, HttpMethod, PathPattern, Requirement, trailing_id};
pub use kinds::{DeletableKind, ResourceKind};
pub use principal::Principal;
pub use role::Role;
