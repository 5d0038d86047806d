//! # Infrastructure Layer
//!
//! Technical concerns behind the domain ports.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | HS256 JWT issuing and validation |
//! | [`crypto`] | bcrypt and Argon2id password hashing |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Concurrent in-memory repositories |
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML and environment configuration |
//! | [`di`] | Composition root building the [`di::AppContext`] |
//! | [`constants`] | Defaults and limits |
//!
//! ### Observability & Utilities
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`utils`] | Clock and time helpers |

pub mod adapters;
pub mod auth;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod utils;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
