//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values using Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use taskgate_domain::AccessRule;
use taskgate_domain::error::{Error, Result};

use crate::config::{AppConfig, AuthConfig, LoggingConfig, ServerConfig};
use crate::constants::{
    BCRYPT_MAX_COST, BCRYPT_MIN_COST, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME, JWT_MIN_SECRET_LENGTH,
};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default
    ///    location that exists)
    /// 3. Environment variables, e.g. `TASKGATE__AUTH__JWT__SECRET`
    ///
    /// An explicit path that does not exist is an error.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).config_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Invalid configuration is the only process-fatal error.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_auth_config(&config.auth)?;
    Ok(())
}

fn validate_server_config(server: &ServerConfig) -> Result<()> {
    if server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if !server.base_path.starts_with('/') {
        return Err(Error::configuration(format!(
            "API base path must start with '/': {}",
            server.base_path
        )));
    }
    Ok(())
}

fn validate_auth_config(auth: &AuthConfig) -> Result<()> {
    if auth.jwt.secret.is_empty() {
        return Err(Error::configuration(
            "JWT secret cannot be empty; set TASKGATE__AUTH__JWT__SECRET",
        ));
    }
    if auth.jwt.secret.len() < JWT_MIN_SECRET_LENGTH {
        return Err(Error::configuration(format!(
            "JWT secret should be at least {JWT_MIN_SECRET_LENGTH} characters long"
        )));
    }
    if auth.jwt.expiration_secs == 0 {
        return Err(Error::configuration("JWT expiration cannot be 0"));
    }
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&auth.bcrypt_cost) {
        return Err(Error::configuration(format!(
            "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}, got {}",
            auth.bcrypt_cost
        )));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set server configuration
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set authentication configuration
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set the JWT signing secret
    pub fn with_jwt_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.config.auth.jwt.secret = secret.into();
        self
    }

    /// Set the bcrypt cost factor
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.auth.bcrypt_cost = cost;
        self
    }

    /// Append an access rule evaluated before the built-in table
    pub fn with_rule(mut self, rule: AccessRule) -> Self {
        self.config.auth.rules.push(rule);
        self
    }

    /// Build the configuration without validating it
    pub fn build(self) -> AppConfig {
        self.config
    }

    /// Build and validate the configuration
    pub fn try_build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
