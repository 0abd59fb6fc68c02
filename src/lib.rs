//! # enum-bridge
//!
//! Persist enumerated Rust values as text columns. Each enum type is
//! registered once under a name with a constructor (text -> value) and an
//! optional serializer (value -> text); the host ORM then asks the registry
//! for the bridge by name when it declares, reads, or writes a column.
//!
//! ## Quick Start
//!
//! ```rust
//! use enum_bridge::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Gender {
//!     Male,
//!     Female,
//! }
//!
//! impl std::fmt::Display for Gender {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str(self.as_text())
//!     }
//! }
//!
//! impl TextEnum for Gender {
//!     const TYPE_NAME: &'static str = "gender";
//!
//!     fn variants() -> &'static [Self] {
//!         &[Gender::Male, Gender::Female]
//!     }
//!
//!     fn as_text(&self) -> &'static str {
//!         match self {
//!             Gender::Male => "male",
//!             Gender::Female => "female",
//!         }
//!     }
//! }
//!
//! fn main() -> Result<(), EnumBridgeError> {
//!     let bridge = EnumBridge::from_config(&AppConfig::default());
//!     bridge.register_enum::<Gender>()?;
//!
//!     let gender = bridge.decode_as::<Gender>("gender", Some("female"))?;
//!     assert_eq!(gender, Some(Gender::Female));
//!
//!     let stored = bridge.encode("gender", Some(&Gender::Male))?;
//!     assert_eq!(stored.as_deref(), Some("male"));
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::EnumBridge;
pub use errors::EnumBridgeError;

// Re-export centralized config
pub use config::{AppConfig, PlatformConfig, RegistryConfig};

// Re-export the registry crate
pub use type_mapping;

// Re-export external dependencies used in public API
pub use sqlx;
