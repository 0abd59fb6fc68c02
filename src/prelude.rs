//! Convenience re-exports for common enum-bridge usage
//!
//! # Example
//!
//! ```rust
//! use enum_bridge::prelude::*;
//!
//! let registry = BridgeRegistry::new();
//! assert!(!registry.has_type("gender"));
//! ```

// Core components
pub use crate::core::EnumBridge;
pub use crate::errors::EnumBridgeError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, PlatformConfig, RegistryConfig};

// Registry, bridges and values
pub use type_mapping::{
    BindableBridge, Binding, Bridge, BridgeError, BridgeRegistry, Callbacks, ColumnOptions,
    Constructor, DomainValue, EnumerationBridge, FieldDeclaration, InvalidValueError, Platform,
    PostgresPlatform, Serializer, TextEnum,
};

// Common external dependencies
pub use anyhow;
pub use sqlx;
pub use sqlx::{PgPool, Row};
