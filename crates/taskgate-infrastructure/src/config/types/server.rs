//! Server configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_PATH, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Prefix shared by every entity route
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            base_path: DEFAULT_API_BASE_PATH.to_string(),
        }
    }
}
