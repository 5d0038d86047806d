//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AuthConfig, LoggingConfig, ServerConfig};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Authentication and authorization settings
    #[serde(default)]
    pub auth: AuthConfig,
}
