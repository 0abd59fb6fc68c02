//! Codec registry
//!
//! Maps type names to bound bridges. Registration normally happens once at
//! startup; lookups and conversions may then run from any thread.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use config::RegistryConfig;

use crate::bridge::{
    BindableBridge, Binding, Bridge, Callbacks, Constructor, EnumerationBridge, Serializer,
};
use crate::errors::BridgeError;
use crate::validate::validate_type_name;
use crate::value::TextEnum;

/// Name -> bridge store
pub struct BridgeRegistry {
    config: RegistryConfig,
    bridges: RwLock<HashMap<String, Arc<dyn Bridge>>>,
}

impl fmt::Debug for BridgeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeRegistry")
            .field("strict", &self.config.strict)
            .field("types", &self.registered_names())
            .finish()
    }
}

impl BridgeRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            bridges: RwLock::new(HashMap::new()),
        }
    }

    /// Whether duplicate registrations are rejected instead of skipped
    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    /// Register `name` with an [`EnumerationBridge`]
    ///
    /// A name that is already registered keeps its first bridge; the call
    /// is a no-op unless the registry is strict.
    pub fn register_one(
        &self,
        name: impl Into<String>,
        constructor: Constructor,
        serializer: Option<Serializer>,
    ) -> Result<(), BridgeError> {
        self.register_one_as::<EnumerationBridge>(name, constructor, serializer)
    }

    /// Register `name` with a bridge of type `B`
    pub fn register_one_as<B: BindableBridge>(
        &self,
        name: impl Into<String>,
        constructor: Constructor,
        serializer: Option<Serializer>,
    ) -> Result<(), BridgeError> {
        let name = name.into();
        validate_type_name(&name)?;

        let mut bridges = self.bridges.write().map_err(|_| BridgeError::LockPoisoned)?;
        if bridges.contains_key(&name) {
            if self.config.strict {
                return Err(BridgeError::AlreadyRegistered(name));
            }
            debug_log!("Type '{}' already registered, skipping", name);
            return Ok(());
        }

        let mut bridge = B::default();
        bridge.bind(Binding::new(
            name.clone(),
            constructor,
            serializer.unwrap_or_default(),
        ));

        debug_log!(
            "Registered type '{}' with {}",
            name,
            std::any::type_name::<B>()
        );
        bridges.insert(name, Arc::new(bridge));
        Ok(())
    }

    /// Register every entry in iteration order, stopping at the first error
    pub fn register_many<I, N, C>(&self, entries: I) -> Result<(), BridgeError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<Callbacks>,
    {
        self.register_many_as::<EnumerationBridge, I, N, C>(entries)
    }

    pub fn register_many_as<B, I, N, C>(&self, entries: I) -> Result<(), BridgeError>
    where
        B: BindableBridge,
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<Callbacks>,
    {
        for (name, callbacks) in entries {
            let callbacks = callbacks.into();
            self.register_one_as::<B>(name, callbacks.constructor, callbacks.serializer)?;
        }
        Ok(())
    }

    /// Register `T` under [`TextEnum::TYPE_NAME`], storing its text tokens
    pub fn register_enum<T: TextEnum>(&self) -> Result<(), BridgeError> {
        self.register_one(
            T::TYPE_NAME,
            Constructor::text_enum::<T>(),
            Some(Serializer::text_enum::<T>()),
        )
    }

    /// Get the bridge registered under `name`
    pub fn get_instance(&self, name: &str) -> Result<Arc<dyn Bridge>, BridgeError> {
        let bridges = self.bridges.read().map_err(|_| BridgeError::LockPoisoned)?;
        bridges
            .get(name)
            .cloned()
            .ok_or_else(|| BridgeError::NotFound(name.to_string()))
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.bridges
            .read()
            .map(|bridges| bridges.contains_key(name))
            .unwrap_or(false)
    }

    /// Registered names, sorted
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .bridges
            .read()
            .map(|bridges| bridges.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.bridges.read().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every registration
    pub fn clear(&self) {
        {
            let mut bridges = self.bridges.write().unwrap_or_else(PoisonError::into_inner);
            debug_log!("Clearing {} registered types", bridges.len());
            bridges.clear();
        }
        self.bridges.clear_poison();
    }
}

impl Default for BridgeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FieldDeclaration, Platform, PostgresPlatform};
    use crate::value::DomainValue;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn echo() -> Constructor {
        Constructor::new(|raw, _name, _platform| {
            Ok(Box::new(raw.to_string()) as Box<dyn DomainValue>)
        })
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = BridgeRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.has_type("status"));

        registry.register_one("status", echo(), None).unwrap();

        assert!(registry.has_type("status"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_instance("status").unwrap().name(), "status");
    }

    #[test]
    fn test_lookup_of_unknown_name_fails() {
        let registry = BridgeRegistry::new();
        assert_eq!(
            registry.get_instance("never-registered").err(),
            Some(BridgeError::NotFound("never-registered".to_string()))
        );
    }

    #[test]
    fn test_same_instance_returned_for_name() {
        let registry = BridgeRegistry::new();
        registry.register_one("status", echo(), None).unwrap();

        let first = registry.get_instance("status").unwrap();
        let second = registry.get_instance("status").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_duplicate_registration_is_skipped() {
        let registry = BridgeRegistry::new();
        let second_calls = Arc::new(AtomicUsize::new(0));

        registry
            .register_one(
                "status",
                Constructor::new(|_raw, _name, _platform| {
                    Ok(Box::new("first".to_string()) as Box<dyn DomainValue>)
                }),
                None,
            )
            .unwrap();

        let calls = second_calls.clone();
        registry
            .register_one(
                "status",
                Constructor::new(move |_raw, _name, _platform| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(Box::new("second".to_string()) as Box<dyn DomainValue>)
                }),
                None,
            )
            .unwrap();

        let platform = PostgresPlatform::default();
        let value = registry
            .get_instance("status")
            .unwrap()
            .decode(Some("x"), &platform)
            .unwrap()
            .unwrap();

        assert_eq!(value.to_string(), "first");
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_strict_registry_rejects_duplicates() {
        let registry = BridgeRegistry::with_config(RegistryConfig::new(true));
        assert!(registry.is_strict());

        registry.register_one("status", echo(), None).unwrap();
        assert_eq!(
            registry.register_one("status", echo(), None),
            Err(BridgeError::AlreadyRegistered("status".to_string()))
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let registry = BridgeRegistry::new();
        assert!(matches!(
            registry.register_one("", echo(), None),
            Err(BridgeError::InvalidRegistration(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_many_stops_at_first_failure() {
        let registry = BridgeRegistry::new();
        let result = registry.register_many(vec![
            ("first", Callbacks::from(echo())),
            ("", Callbacks::from(echo())),
            ("third", Callbacks::from(echo())),
        ]);

        assert!(matches!(result, Err(BridgeError::InvalidRegistration(_))));
        assert!(registry.has_type("first"));
        assert!(!registry.has_type("third"));
    }

    #[test]
    fn test_clear_resets_registry() {
        let registry = BridgeRegistry::new();
        registry
            .register_many(vec![("a", echo()), ("b", echo())])
            .unwrap();
        assert_eq!(registry.registered_names(), vec!["a", "b"]);

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.has_type("a"));
    }

    struct PanickingBridge;

    impl Default for PanickingBridge {
        fn default() -> Self {
            panic!("bridge construction failed");
        }
    }

    impl Bridge for PanickingBridge {
        fn binding(&self) -> Option<&Binding> {
            None
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    impl BindableBridge for PanickingBridge {
        fn bind(&mut self, _binding: Binding) {}
    }

    #[test]
    fn test_clear_recovers_from_poisoned_lock() {
        let registry = Arc::new(BridgeRegistry::new());

        let shared = registry.clone();
        let result = std::thread::spawn(move || {
            let _ = shared.register_one_as::<PanickingBridge>("broken", echo(), None);
        })
        .join();
        assert!(result.is_err());
        assert_eq!(
            registry.register_one("status", echo(), None),
            Err(BridgeError::LockPoisoned)
        );

        registry.clear();

        registry.register_one("status", echo(), None).unwrap();
        assert!(registry.has_type("status"));
        assert_eq!(registry.len(), 1);
    }

    #[derive(Default)]
    struct FixedDeclarationBridge {
        binding: Option<Binding>,
    }

    impl Bridge for FixedDeclarationBridge {
        fn binding(&self) -> Option<&Binding> {
            self.binding.as_ref()
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn column_declaration(&self, _field: &FieldDeclaration, _platform: &dyn Platform) -> String {
            "TEXT".to_string()
        }
    }

    impl BindableBridge for FixedDeclarationBridge {
        fn bind(&mut self, binding: Binding) {
            self.binding = Some(binding);
        }
    }

    #[test]
    fn test_register_with_custom_bridge() {
        let registry = BridgeRegistry::new();
        registry
            .register_one_as::<FixedDeclarationBridge>("status", echo(), None)
            .unwrap();

        let bridge = registry.get_instance("status").unwrap();
        assert!(bridge.is::<FixedDeclarationBridge>());
        assert!(!bridge.is::<EnumerationBridge>());
        assert_eq!(
            bridge.column_declaration(&FieldDeclaration::default(), &PostgresPlatform::default()),
            "TEXT"
        );
    }
}
