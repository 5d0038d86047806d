//! Application Layer - taskgate
//!
//! Use cases and domain services for the task manager's access-control
//! subsystem. Everything here is written against the port traits in
//! `taskgate-domain`; no cryptography, storage or HTTP lives in this crate.
//!
//! ## Domain Services
//!
//! - [`AccessPolicy`]: ordered rule table and the per-request decision
//! - [`DeletionGuard`]: refuses deletion of entities still referenced by tasks
//!
//! ## Use Cases
//!
//! - [`AuthServiceImpl`]: login, identity resolution, and the facade the HTTP
//!   layer talks to

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
