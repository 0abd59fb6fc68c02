//! Error types for the enum-bridge crate
//!
//! This module contains all error types that can be returned by the host integration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnumBridgeError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Bridge(#[from] type_mapping::BridgeError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("Invalid identifier '{0}'")]
    InvalidIdentifier(String),

    /// Raised by a registered constructor or serializer, unchanged
    #[error(transparent)]
    Conversion(anyhow::Error),
}

impl From<anyhow::Error> for EnumBridgeError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<type_mapping::BridgeError>() {
            Ok(err) => Self::Bridge(err),
            Err(err) => Self::Conversion(err),
        }
    }
}
