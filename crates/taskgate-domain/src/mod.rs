//! # taskgate Domain Layer
//!
//! Core types for the task manager's authentication and authorization
//! subsystem. This crate holds no I/O: persistence and cryptography are
//! reached through the traits in [`ports`].
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Persisted records: users, tasks, task statuses, labels |
//! | [`value_objects`] | Principals, roles, access rules, decisions |
//! | [`ports`] | Repository, token and credential contracts |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain-level constants |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{Label, NewTask, NewUser, Task, TaskStatus, User};
pub use error::{Error, Result};
pub use value_objects::{
    AccessRule, Decision, DeletableKind, HttpMethod, PathPattern, Principal, Requirement,
    ResourceKind, Role,
};
