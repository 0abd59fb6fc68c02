//! Column migration helpers
//!
//! This module generates (and optionally executes) the DDL that adds a column
//! for a registered enum type to an existing table.

use sqlx::PgPool;
use type_mapping::FieldDeclaration;

use crate::core::EnumBridge;
use crate::errors::EnumBridgeError;

/// PostgreSQL identifier length limit
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Accept plain SQL identifiers only: letters, digits and underscores,
/// not starting with a digit
fn validate_identifier(name: &str) -> Result<(), EnumBridgeError> {
    let first_char = name
        .chars()
        .next()
        .ok_or_else(|| EnumBridgeError::InvalidIdentifier(name.to_string()))?;

    if name.len() > MAX_IDENTIFIER_LENGTH
        || !(first_char.is_ascii_alphabetic() || first_char == '_')
        || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(EnumBridgeError::InvalidIdentifier(name.to_string()));
    }

    Ok(())
}

impl EnumBridge {
    /// Column definition, e.g. `status VARCHAR NOT NULL`
    pub fn column_definition(
        &self,
        column: &str,
        type_name: &str,
        field: &FieldDeclaration,
    ) -> Result<String, EnumBridgeError> {
        validate_identifier(column)?;
        let declaration = self.column_declaration(type_name, field)?;

        if field.nullable {
            Ok(format!("{} {}", column, declaration))
        } else {
            Ok(format!("{} {} NOT NULL", column, declaration))
        }
    }

    pub fn add_column_sql(
        &self,
        table: &str,
        column: &str,
        type_name: &str,
        field: &FieldDeclaration,
    ) -> Result<String, EnumBridgeError> {
        validate_identifier(table)?;
        let definition = self.column_definition(column, type_name, field)?;
        Ok(format!(
            "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {}",
            table, definition
        ))
    }

    /// Add the column for `type_name` to `table` if it does not exist yet
    pub async fn add_column(
        &self,
        pool: &PgPool,
        table: &str,
        column: &str,
        type_name: &str,
        field: &FieldDeclaration,
    ) -> Result<(), EnumBridgeError> {
        let sql = self.add_column_sql(table, column, type_name, field)?;
        debug_log!("Adding enum column with SQL: {}", sql);
        sqlx::query(&sql).execute(pool).await?;
        Ok(())
    }
}
