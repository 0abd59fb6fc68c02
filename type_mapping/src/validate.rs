//! Validation utilities for type mapping
//!
//! This module provides validation functions
//! for registration input.

use crate::errors::BridgeError;

/// Check that a registration name is usable as a type name
pub fn validate_type_name(name: &str) -> Result<(), BridgeError> {
    if name.trim().is_empty() {
        return Err(BridgeError::InvalidRegistration(
            "type name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_validation() {
        assert!(validate_type_name("gender").is_ok());
        assert!(validate_type_name("app::Action").is_ok());

        assert!(matches!(
            validate_type_name(""),
            Err(BridgeError::InvalidRegistration(_))
        ));
        assert!(matches!(
            validate_type_name("   "),
            Err(BridgeError::InvalidRegistration(_))
        ));
    }
}
