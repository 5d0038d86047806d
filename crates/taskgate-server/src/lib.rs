//! # taskgate Server
//!
//! Rocket HTTP surface for the task manager: login, user registration and
//! get/delete routes for every entity, all behind one authorization request
//! guard.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskgate_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config locations plus TASKGATE__* environment variables
//!     run(None).await
//! }
//! ```
//!
//! ## Request flow
//!
//! ```text
//! request → Authorized guard (decoded path, resolve_identity → decide) → handler
//!         → DeletionGuard (deletes only) → repository
//! ```

// Allow Rust 2024 compatibility issues from Rocket's codegen
#![allow(rust_2024_compatibility)]

pub mod auth;
pub mod catchers;
pub mod constants;
pub mod error;
pub mod handlers;

use std::net::IpAddr;
use std::path::Path;

use rocket::config::{Config as RocketConfig, LogLevel};
use rocket::{Build, Rocket, catchers, routes};
use taskgate_infrastructure::config::ServerConfig;
use taskgate_infrastructure::{AppContext, ConfigLoader, init_app, init_logging};
use tracing::info;

pub use auth::Authorized;
pub use error::{ApiError, ApiResult, ErrorResponse};

/// Build the Rocket instance for an application context
///
/// Banner and health routes mount at `/`; entity routes mount at the
/// configured base path.
pub fn rocket(ctx: AppContext) -> Rocket<Build> {
    let base_path = ctx.config.server.base_path.clone();
    rocket::build()
        .manage(ctx)
        .mount("/", routes![handlers::health::index, handlers::health::health])
        .mount(
            base_path,
            routes![
                handlers::login::login,
                handlers::users::list_users,
                handlers::users::get_user,
                handlers::users::create_user,
                handlers::users::update_user,
                handlers::users::delete_user,
                handlers::tasks::create_task,
                handlers::tasks::get_task,
                handlers::tasks::delete_task,
                handlers::statuses::get_status,
                handlers::statuses::delete_status,
                handlers::labels::get_label,
                handlers::labels::delete_label,
            ],
        )
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::unauthorized,
                catchers::forbidden,
                catchers::not_found,
                catchers::unprocessable_entity,
                catchers::internal_error,
                catchers::default_catcher,
            ],
        )
}

/// Rocket listener settings for the server section
pub fn rocket_config(server: &ServerConfig) -> Result<RocketConfig, Box<dyn std::error::Error>> {
    let address: IpAddr = server
        .host
        .parse()
        .map_err(|e| format!("Invalid server host '{}': {e}", server.host))?;
    Ok(RocketConfig {
        address,
        port: server.port,
        log_level: LogLevel::Critical,
        ..RocketConfig::default()
    })
}

/// Load configuration, initialise logging and serve until shutdown
///
/// Invalid configuration is reported before anything binds.
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let rocket_config = rocket_config(&config.server)?;
    let ctx = init_app(config)?;

    info!(
        address = %rocket_config.address,
        port = rocket_config.port,
        base_path = %ctx.config.server.base_path,
        "taskgate listening"
    );

    rocket(ctx).configure(rocket_config).launch().await?;
    Ok(())
}
