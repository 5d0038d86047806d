//! Application bootstrap
//!
//! Builds the repositories, credential and token services, access policy and
//! deletion guard from a validated [`AppConfig`].
//!
//! ```text
//! AppConfig → PasswordService, JwtTokenService, in-memory repositories
//!           → AccessPolicy (config rules + defaults), DeletionGuard
//!           → AuthServiceImpl
//! ```

use std::sync::Arc;

use taskgate_application::{AccessPolicy, AuthServiceImpl, DeletionGuard};
use taskgate_domain::error::Result;
use taskgate_domain::ports::{
    LabelRepository, TaskRepository, TaskStatusRepository, UserRepository,
};
use tracing::info;

use crate::adapters::memory::{
    InMemoryLabelRepository, InMemoryTaskRepository, InMemoryTaskStatusRepository,
    InMemoryUserRepository,
};
use crate::auth::JwtTokenService;
use crate::config::AppConfig;
use crate::config::loader::validate_app_config;
use crate::crypto::PasswordService;
use crate::utils::SystemClock;

/// Shared services for the lifetime of the process
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User persistence
    pub users: Arc<dyn UserRepository>,
    /// Task persistence
    pub tasks: Arc<dyn TaskRepository>,
    /// Task status persistence
    pub statuses: Arc<dyn TaskStatusRepository>,
    /// Label persistence
    pub labels: Arc<dyn LabelRepository>,
    /// Login, identity resolution, decisions and deletion guard
    pub auth: Arc<AuthServiceImpl>,
}

/// Build the application context
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    validate_app_config(&config)?;

    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let tasks: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new());
    let statuses: Arc<dyn TaskStatusRepository> = Arc::new(InMemoryTaskStatusRepository::new());
    let labels: Arc<dyn LabelRepository> = Arc::new(InMemoryLabelRepository::new());

    let policy = AccessPolicy::with_defaults(
        &config.server.base_path,
        config.auth.rules.clone(),
        Arc::clone(&tasks),
    )?;
    info!(rules = policy.rules().len(), "Access policy loaded");

    let auth = Arc::new(AuthServiceImpl::new(
        Arc::clone(&users),
        Arc::new(JwtTokenService::from_config(&config.auth.jwt)),
        Arc::new(PasswordService::from_config(&config.auth)),
        Arc::new(SystemClock),
        policy,
        DeletionGuard::new(Arc::clone(&tasks)),
    ));

    Ok(AppContext {
        config: Arc::new(config),
        users,
        tasks,
        statuses,
        labels,
        auth,
    })
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
