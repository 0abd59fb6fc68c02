//! Error types for the codec registry
//!
//! Errors raised by caller-supplied constructors and serializers are not
//! listed here: they travel as [`anyhow::Error`] exactly as produced.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Invalid registration: {0}")]
    InvalidRegistration(String),

    #[error("Type not found: {0}")]
    NotFound(String),

    #[error("Type already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Bridge is not bound to a registration: {0}")]
    Unbound(String),

    #[error("Value decoded by \"{name}\" is not a {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    #[error("Registry lock poisoned")]
    LockPoisoned,
}
