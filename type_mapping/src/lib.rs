//! Named codec registry mapping enumerated Rust values to text columns
//!
//! A [`BridgeRegistry`] holds one [`Bridge`] per registered type name. Each
//! bridge carries a constructor (text -> domain value) and a serializer
//! (domain value -> text) and tells the host ORM which column to declare.

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

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod bridge;
pub mod errors;
pub mod platform;
pub mod registry;
pub mod validate;
pub mod value;

pub use bridge::{
    BindableBridge, Binding, Bridge, Callbacks, Constructor, EnumerationBridge, Serializer,
    FALLBACK_NAME,
};
pub use errors::BridgeError;
pub use platform::{ColumnOptions, FieldDeclaration, Platform, PostgresPlatform};
pub use registry::BridgeRegistry;
pub use validate::validate_type_name;
pub use value::{DomainValue, InvalidValueError, TextEnum};
