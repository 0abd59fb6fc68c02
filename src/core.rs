//! Core enum-bridge functionality
//!
//! This module contains the [`EnumBridge`] coordinator, which pairs a codec
//! registry with the database platform and performs conversions on behalf of
//! the host ORM's read and write paths.

use std::sync::Arc;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Postgres, Row};

use config::AppConfig;
use type_mapping::{
    Bridge, BridgeRegistry, DomainValue, FieldDeclaration, Platform, PostgresPlatform, TextEnum,
};

use crate::errors::EnumBridgeError;

/// Registry plus platform, shared by everything that reads or writes mapped columns
#[derive(Clone)]
pub struct EnumBridge {
    registry: Arc<BridgeRegistry>,
    platform: Arc<dyn Platform>,
}

impl std::fmt::Debug for EnumBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumBridge")
            .field("registry", &self.registry)
            .field("platform", &self.platform.name())
            .finish()
    }
}

impl EnumBridge {
    pub fn new(registry: Arc<BridgeRegistry>, platform: Arc<dyn Platform>) -> Self {
        Self { registry, platform }
    }

    /// Build a PostgreSQL bridge from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(BridgeRegistry::with_config(config.registry.clone())),
            Arc::new(PostgresPlatform::new(&config.platform)),
        )
    }

    /// Build from [`AppConfig::load`]
    pub fn load() -> Result<Self, EnumBridgeError> {
        let config = AppConfig::load()?;
        Ok(Self::from_config(&config))
    }

    pub fn registry(&self) -> &Arc<BridgeRegistry> {
        &self.registry
    }

    pub fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }

    /// Register a [`TextEnum`] under its type name
    pub fn register_enum<T: TextEnum>(&self) -> Result<(), EnumBridgeError> {
        self.registry.register_enum::<T>()?;
        Ok(())
    }

    /// Get the bridge registered under `type_name`
    pub fn bridge(&self, type_name: &str) -> Result<Arc<dyn Bridge>, EnumBridgeError> {
        Ok(self.registry.get_instance(type_name)?)
    }

    /// SQL type snippet for a column of `type_name`
    pub fn column_declaration(
        &self,
        type_name: &str,
        field: &FieldDeclaration,
    ) -> Result<String, EnumBridgeError> {
        let bridge = self.bridge(type_name)?;
        Ok(bridge.column_declaration(field, self.platform()))
    }

    pub fn decode(
        &self,
        type_name: &str,
        raw: Option<&str>,
    ) -> Result<Option<Box<dyn DomainValue>>, EnumBridgeError> {
        let bridge = self.bridge(type_name)?;
        Ok(bridge.decode(raw, self.platform())?)
    }

    pub fn decode_as<T: DomainValue + Clone>(
        &self,
        type_name: &str,
        raw: Option<&str>,
    ) -> Result<Option<T>, EnumBridgeError> {
        let bridge = self.bridge(type_name)?;
        Ok(bridge.decode_as::<T>(raw, self.platform())?)
    }

    pub fn encode(
        &self,
        type_name: &str,
        value: Option<&(dyn DomainValue + 'static)>,
    ) -> Result<Option<String>, EnumBridgeError> {
        let bridge = self.bridge(type_name)?;
        Ok(bridge.encode(value, self.platform())?)
    }

    /// Read the text `column` of `row` and decode it as `type_name`
    pub fn decode_column(
        &self,
        row: &PgRow,
        column: &str,
        type_name: &str,
    ) -> Result<Option<Box<dyn DomainValue>>, EnumBridgeError> {
        let raw: Option<String> = row.try_get(column)?;
        self.decode(type_name, raw.as_deref())
    }

    pub fn decode_column_as<T: DomainValue + Clone>(
        &self,
        row: &PgRow,
        column: &str,
        type_name: &str,
    ) -> Result<Option<T>, EnumBridgeError> {
        let raw: Option<String> = row.try_get(column)?;
        self.decode_as::<T>(type_name, raw.as_deref())
    }

    /// Encode `value` as `type_name` and bind the result to `query`
    pub fn bind_value<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
        type_name: &str,
        value: Option<&(dyn DomainValue + 'static)>,
    ) -> Result<Query<'q, Postgres, PgArguments>, EnumBridgeError> {
        let encoded = self.encode(type_name, value)?;
        Ok(query.bind(encoded))
    }
}
