//! Domain values handled by the bridges
//!
//! Bridges are registered for many unrelated enumerations, so decoded values
//! are type-erased behind [`DomainValue`] and recovered with
//! [`downcast_ref`](DomainValue::downcast_ref) on the host side.

use std::any::Any;
use std::fmt;
use thiserror::Error;

/// In-memory value produced by decoding and consumed by encoding
pub trait DomainValue: Any + fmt::Display + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T> DomainValue for T
where
    T: Any + fmt::Display + fmt::Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn DomainValue {
    /// The value behind any `Box<dyn DomainValue>` layers
    pub fn unboxed(&self) -> &dyn DomainValue {
        match self.as_any().downcast_ref::<Box<dyn DomainValue>>() {
            Some(inner) => inner.unboxed(),
            None => self,
        }
    }

    /// Returns true if the erased value is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.unboxed().as_any().is::<T>()
    }

    /// Borrow the erased value as a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.unboxed().as_any().downcast_ref::<T>()
    }
}

/// Raised by constructors when a stored token maps to no known value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("\"{value}\" not valid for \"{type_name}\"")]
pub struct InvalidValueError {
    pub value: String,
    pub type_name: String,
}

impl InvalidValueError {
    pub fn new(value: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            type_name: type_name.into(),
        }
    }
}

/// A closed set of values with one text token each
///
/// ```rust
/// use std::fmt;
/// use type_mapping::TextEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Gender {
///     Male,
///     Female,
/// }
///
/// impl fmt::Display for Gender {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(self.as_text())
///     }
/// }
///
/// impl TextEnum for Gender {
///     const TYPE_NAME: &'static str = "gender";
///
///     fn variants() -> &'static [Self] {
///         &[Gender::Male, Gender::Female]
///     }
///
///     fn as_text(&self) -> &'static str {
///         match self {
///             Gender::Male => "male",
///             Gender::Female => "female",
///         }
///     }
/// }
///
/// assert_eq!(Gender::from_text("female"), Some(Gender::Female));
/// assert!(!Gender::is_valid("other"));
/// ```
pub trait TextEnum: DomainValue + Clone {
    /// Name the type is registered under
    const TYPE_NAME: &'static str;

    fn variants() -> &'static [Self];

    fn as_text(&self) -> &'static str;

    fn from_text(text: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .find(|variant| variant.as_text() == text)
            .cloned()
    }

    fn is_valid(text: &str) -> bool {
        Self::from_text(text).is_some()
    }
}
