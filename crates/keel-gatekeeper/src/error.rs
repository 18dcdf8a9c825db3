//! Gatekeeper error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// No rules are registered for the entity type and the configuration
    /// denies unregistered types
    #[error("No validation rules registered for entity '{entity}'")]
    Unregistered {
        /// Entity type name
        entity: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
