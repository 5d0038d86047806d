//! Use cases

pub mod auth_service;

pub use auth_service::{AuthServiceImpl, bearer_token};
