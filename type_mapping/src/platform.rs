//! SQL platform abstraction
//!
//! This module describes the part of a database dialect the bridges need:
//! how to declare a variable-length string column.

use config::PlatformConfig;

/// Options handed to [`Platform::varchar_type_declaration`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    pub length: Option<u32>,
    pub fixed: bool,
}

impl ColumnOptions {
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }
}

/// Field metadata of a mapped column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub nullable: bool,
}

impl Default for FieldDeclaration {
    fn default() -> Self {
        Self {
            length: None,
            precision: None,
            scale: None,
            nullable: true,
        }
    }
}

impl FieldDeclaration {
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// Dialect-specific column declaration syntax
pub trait Platform: Send + Sync {
    /// Dialect name, e.g. `postgresql`
    fn name(&self) -> &str;

    /// SQL type snippet for a variable-length string column
    fn varchar_type_declaration(&self, options: &ColumnOptions) -> String;
}

/// PostgreSQL dialect
#[derive(Debug, Clone, Default)]
pub struct PostgresPlatform {
    default_varchar_length: Option<u32>,
}

impl PostgresPlatform {
    pub fn new(config: &PlatformConfig) -> Self {
        Self {
            default_varchar_length: config.default_varchar_length,
        }
    }
}

impl Platform for PostgresPlatform {
    fn name(&self) -> &str {
        "postgresql"
    }

    fn varchar_type_declaration(&self, options: &ColumnOptions) -> String {
        let length = options.length.or(self.default_varchar_length);
        match (options.fixed, length) {
            (true, Some(length)) => format!("CHAR({})", length),
            (true, None) => "CHAR".to_string(),
            (false, Some(length)) => format!("VARCHAR({})", length),
            (false, None) => "VARCHAR".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_varchar_declarations() {
        let platform = PostgresPlatform::default();

        assert_eq!(platform.name(), "postgresql");
        assert_eq!(
            platform.varchar_type_declaration(&ColumnOptions::default()),
            "VARCHAR"
        );
        assert_eq!(
            platform.varchar_type_declaration(&ColumnOptions::default().with_length(10)),
            "VARCHAR(10)"
        );
        assert_eq!(
            platform.varchar_type_declaration(&ColumnOptions::default().with_length(2).fixed()),
            "CHAR(2)"
        );
    }

    #[test]
    fn test_postgres_default_length_from_config() {
        let platform = PostgresPlatform::new(&PlatformConfig::new(Some(255)));

        assert_eq!(
            platform.varchar_type_declaration(&ColumnOptions::default()),
            "VARCHAR(255)"
        );
        // An explicit length still wins
        assert_eq!(
            platform.varchar_type_declaration(&ColumnOptions::default().with_length(16)),
            "VARCHAR(16)"
        );
    }
}
