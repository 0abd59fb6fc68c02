//! # Configuration Management for enum-bridge
//!
//! This crate provides the configuration structures shared by the registry
//! and the database platform bindings.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{AppConfig, PlatformConfig, RegistryConfig};
//!
//! let config = AppConfig::new(
//!     RegistryConfig::new(true),
//!     PlatformConfig::new(Some(64)),
//! );
//! assert!(config.registry.strict);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [registry]
//! strict = false
//!
//! [platform]
//! default_varchar_length = 255
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from ENUM_BRIDGE_CONFIG or ./enum_bridge.toml, falling back to defaults
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./enum_bridge.toml";
const CONFIG_PATH_VAR: &str = "ENUM_BRIDGE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
}

/// Codec registry configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Reject duplicate registrations instead of silently skipping them
    #[serde(default)]
    pub strict: bool,
}

/// Database platform configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Length used for `VARCHAR` columns when the declaration carries none.
    /// `None` declares an unbounded `VARCHAR`.
    #[serde(default)]
    pub default_varchar_length: Option<u32>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(registry: RegistryConfig, platform: PlatformConfig) -> Self {
        Self { registry, platform }
    }

    /// Load configuration from the TOML file named in `.env`/environment,
    /// the default path, or fall back to defaults when neither exists
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)?
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.platform.default_varchar_length == Some(0) {
            return Err(ConfigError::Invalid(
                "Platform default_varchar_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl RegistryConfig {
    /// Create a new registry configuration
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl PlatformConfig {
    /// Create a new platform configuration
    pub fn new(default_varchar_length: Option<u32>) -> Self {
        Self {
            default_varchar_length,
        }
    }
}
