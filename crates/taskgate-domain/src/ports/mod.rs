//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the layers around it. The
//! application layer depends on these traits; the infrastructure crate
//! implements them.
//!
//! ## Organization
//!
//! - **auth** - token issuing, credential hashing, the clock and the
//!   application-facing auth service
//! - **repositories** - persistence lookups for users, tasks, statuses and labels

/// Authentication and authorization ports
pub mod auth;
/// Persistence ports
pub mod repositories;

pub use auth::{AuthServiceInterface, Clock, CredentialVerifier, TokenService};
pub use repositories::{LabelRepository, TaskRepository, TaskStatusRepository, UserRepository};
