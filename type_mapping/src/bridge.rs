//! Bridge instances
//!
//! A bridge is the column type handle the host ORM works with. It is bound
//! once to a [`Binding`] (name, constructor, serializer) by the registry and
//! delegates every conversion to it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::errors::BridgeError;
use crate::platform::{ColumnOptions, FieldDeclaration, Platform};
use crate::value::{DomainValue, InvalidValueError, TextEnum};

/// Name reported by a bridge that was never bound
pub const FALLBACK_NAME: &str = "enum";

type ConstructorFn =
    dyn Fn(&str, &str, &dyn Platform) -> anyhow::Result<Box<dyn DomainValue>> + Send + Sync;

type SerializerFn = dyn Fn(
    Option<&(dyn DomainValue + 'static)>,
    &str,
    &dyn Platform,
) -> anyhow::Result<Option<String>>
    + Send
    + Sync;

/// Builds a domain value from its stored text: `(raw, name, platform)`
#[derive(Clone)]
pub struct Constructor(Arc<ConstructorFn>);

impl Constructor {
    pub fn new<F>(constructor: F) -> Self
    where
        F: Fn(&str, &str, &dyn Platform) -> anyhow::Result<Box<dyn DomainValue>>
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(constructor))
    }

    /// Constructor accepting exactly the tokens of `T`, failing with
    /// [`InvalidValueError`] otherwise
    pub fn text_enum<T: TextEnum>() -> Self {
        Self::new(|raw, name, _platform| match T::from_text(raw) {
            Some(value) => Ok(Box::new(value) as Box<dyn DomainValue>),
            None => Err(InvalidValueError::new(raw, name).into()),
        })
    }

    pub fn call(
        &self,
        raw: &str,
        name: &str,
        platform: &dyn Platform,
    ) -> anyhow::Result<Box<dyn DomainValue>> {
        (self.0)(raw, name, platform)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Constructor")
    }
}

/// Turns a domain value (or null) into its stored text: `(value, name, platform)`
#[derive(Clone)]
pub struct Serializer(Arc<SerializerFn>);

impl Serializer {
    pub fn new<F>(serializer: F) -> Self
    where
        F: Fn(
                Option<&(dyn DomainValue + 'static)>,
                &str,
                &dyn Platform,
            ) -> anyhow::Result<Option<String>>
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(serializer))
    }

    /// Null stays null, anything else is stored as its `Display` form
    pub fn display() -> Self {
        Self::new(|value, _name, _platform| Ok(value.map(|value| value.to_string())))
    }

    /// Stores the token of `T`; values of any other type are rejected
    pub fn text_enum<T: TextEnum>() -> Self {
        Self::new(|value, name, _platform| match value {
            None => Ok(None),
            Some(value) => match value.downcast_ref::<T>() {
                Some(value) => Ok(Some(value.as_text().to_string())),
                None => Err(BridgeError::TypeMismatch {
                    name: name.to_string(),
                    expected: std::any::type_name::<T>(),
                }
                .into()),
            },
        })
    }

    pub fn call(
        &self,
        value: Option<&(dyn DomainValue + 'static)>,
        name: &str,
        platform: &dyn Platform,
    ) -> anyhow::Result<Option<String>> {
        (self.0)(value, name, platform)
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::display()
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Serializer")
    }
}

/// One `register_many` entry: a constructor and an optional serializer
#[derive(Debug, Clone)]
pub struct Callbacks {
    pub constructor: Constructor,
    pub serializer: Option<Serializer>,
}

impl From<Constructor> for Callbacks {
    fn from(constructor: Constructor) -> Self {
        Self {
            constructor,
            serializer: None,
        }
    }
}

impl From<(Constructor, Serializer)> for Callbacks {
    fn from((constructor, serializer): (Constructor, Serializer)) -> Self {
        Self {
            constructor,
            serializer: Some(serializer),
        }
    }
}

/// The registration a bridge is bound to
#[derive(Debug, Clone)]
pub struct Binding {
    name: String,
    constructor: Constructor,
    serializer: Serializer,
}

impl Binding {
    pub fn new(name: impl Into<String>, constructor: Constructor, serializer: Serializer) -> Self {
        Self {
            name: name.into(),
            constructor,
            serializer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }
}

/// Column type handle used by the host ORM
///
/// Implementors provide [`binding`](Bridge::binding) and
/// [`as_any`](Bridge::as_any); the conversion methods have working defaults
/// and are overridden only where a bridge behaves differently.
pub trait Bridge: Any + Send + Sync {
    fn binding(&self) -> Option<&Binding>;

    fn as_any(&self) -> &dyn Any;

    /// Registration name, or [`FALLBACK_NAME`] while unbound
    fn name(&self) -> &str {
        self.binding().map(Binding::name).unwrap_or(FALLBACK_NAME)
    }

    /// Always a plain string column; field length and precision are ignored
    fn column_declaration(&self, _field: &FieldDeclaration, platform: &dyn Platform) -> String {
        platform.varchar_type_declaration(&ColumnOptions::default())
    }

    /// Null decodes to `None` without reaching the constructor. Constructor
    /// errors are returned as produced.
    fn decode(
        &self,
        raw: Option<&str>,
        platform: &dyn Platform,
    ) -> anyhow::Result<Option<Box<dyn DomainValue>>> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let binding = self
            .binding()
            .ok_or_else(|| BridgeError::Unbound(FALLBACK_NAME.to_string()))?;

        trace_log!("Decoding '{}' as {}", raw, binding.name());
        binding
            .constructor()
            .call(raw, binding.name(), platform)
            .map(Some)
    }

    /// Null is handed to the serializer like any other value
    fn encode(
        &self,
        value: Option<&(dyn DomainValue + 'static)>,
        platform: &dyn Platform,
    ) -> anyhow::Result<Option<String>> {
        let binding = self
            .binding()
            .ok_or_else(|| BridgeError::Unbound(FALLBACK_NAME.to_string()))?;

        trace_log!("Encoding {:?} as {}", value, binding.name());
        binding.serializer().call(value, binding.name(), platform)
    }
}

impl dyn Bridge {
    /// Returns true if the bridge is a `B`
    pub fn is<B: Bridge>(&self) -> bool {
        self.as_any().is::<B>()
    }

    pub fn downcast_ref<B: Bridge>(&self) -> Option<&B> {
        self.as_any().downcast_ref::<B>()
    }

    /// Decode and return an owned `T`, failing if the constructor built
    /// something else
    pub fn decode_as<T: DomainValue + Clone>(
        &self,
        raw: Option<&str>,
        platform: &dyn Platform,
    ) -> anyhow::Result<Option<T>> {
        let Some(value) = self.decode(raw, platform)? else {
            return Ok(None);
        };

        match value.downcast_ref::<T>() {
            Some(value) => Ok(Some(value.clone())),
            None => Err(BridgeError::TypeMismatch {
                name: self.name().to_string(),
                expected: std::any::type_name::<T>(),
            }
            .into()),
        }
    }
}

/// A bridge the registry can create and bind
pub trait BindableBridge: Bridge + Default {
    fn bind(&mut self, binding: Binding);
}

/// Default bridge: a plain string column
#[derive(Debug, Default)]
pub struct EnumerationBridge {
    binding: Option<Binding>,
}

impl Bridge for EnumerationBridge {
    fn binding(&self) -> Option<&Binding> {
        self.binding.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl BindableBridge for EnumerationBridge {
    fn bind(&mut self, binding: Binding) {
        self.binding = Some(binding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PostgresPlatform;

    #[test]
    fn test_unbound_bridge() {
        let bridge = EnumerationBridge::default();
        let platform = PostgresPlatform::default();

        assert_eq!(bridge.name(), FALLBACK_NAME);
        // Null never reaches the (missing) constructor
        assert!(bridge.decode(None, &platform).unwrap().is_none());

        let err = bridge.decode(Some("male"), &platform).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BridgeError>(),
            Some(BridgeError::Unbound(_))
        ));
        assert!(bridge.encode(None, &platform).is_err());
    }

    #[test]
    fn test_display_serializer() {
        let serializer = Serializer::default();
        let platform = PostgresPlatform::default();

        assert_eq!(serializer.call(None, "number", &platform).unwrap(), None);
        assert_eq!(
            serializer.call(Some(&42u32), "number", &platform).unwrap(),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_bound_bridge_passes_name_to_callbacks() {
        let constructor = Constructor::new(|raw, name, platform| {
            Ok(Box::new(format!("{}:{}:{}", platform.name(), name, raw)) as Box<dyn DomainValue>)
        });
        let serializer = Serializer::new(|value, name, _platform| {
            Ok(Some(format!("{}={}", name, value.map(|v| v.to_string()).unwrap_or_default())))
        });

        let mut bridge = EnumerationBridge::default();
        bridge.bind(Binding::new("status", constructor, serializer));
        let platform = PostgresPlatform::default();

        let decoded = bridge.decode(Some("open"), &platform).unwrap().unwrap();
        assert_eq!(decoded.to_string(), "postgresql:status:open");
        assert_eq!(
            bridge.encode(None, &platform).unwrap(),
            Some("status=".to_string())
        );
    }
}
