//! Gatekeeper configuration
//!
//! Loaded from TOML; every field is optional and falls back to
//! [`ValidationConfig::default`].

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds a value that cannot be used
    #[error("Invalid configuration value for '{field}': {reason}")]
    Invalid {
        /// Offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// How the gatekeeper turns fired rules into an acceptance decision
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Treat warnings as blocking errors
    pub warnings_as_errors: bool,

    /// Stop evaluating an entity after the first blocking result
    pub stop_on_first_error: bool,

    /// Maximum results collected per entity (`None` = unlimited, not expressible in TOML)
    pub max_results: Option<usize>,

    /// Fail validation of entity types that have no registered rules
    pub deny_unregistered: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            warnings_as_errors: false,
            stop_on_first_error: false,
            max_results: Some(100),
            deny_unregistered: false,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (collect everything, never refuse a type)
    pub fn permissive() -> Self {
        Self {
            warnings_as_errors: false,
            stop_on_first_error: false,
            max_results: None,
            deny_unregistered: false,
        }
    }

    /// Create a strict configuration (warnings block, unknown types refused)
    pub fn strict() -> Self {
        Self {
            warnings_as_errors: true,
            stop_on_first_error: false,
            max_results: Some(100),
            deny_unregistered: true,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ValidationConfig = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.max_results == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_results".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
