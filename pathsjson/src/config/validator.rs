//! Definition file validation.
//!
//! Documents are checked against the embedded JSON schema before they are
//! converted to a [`Namespace`]; namespaces are checked again after globals
//! and environment overrides have been merged in.

use serde_json::Value;

use crate::config::schema::Namespace;
use crate::error::{Error, Result};
use crate::expand::check_shadowing;

/// The JSON schema every `.paths.json` document must satisfy.
pub const SCHEMA: &str = include_str!("schema.json");

/// Validate a raw document against [`SCHEMA`].
///
/// # Errors
///
/// Returns [`Error::SchemaViolation`] listing every violation, each
/// prefixed with the JSON pointer of the offending value.
///
/// # Examples
///
/// ```
/// use pathsjson::config::validate_document;
/// use serde_json::json;
///
/// assert!(validate_document(&json!({"data_dir": ["data"]})).is_ok());
/// assert!(validate_document(&json!({"data_dir": "data"})).is_err());
/// ```
pub fn validate_document(document: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(SCHEMA)?;
    let validator = jsonschema::validator_for(&schema).map_err(|e| Error::Validation {
        field: "schema".into(),
        message: format!("Invalid schema: {e}"),
    })?;

    let errors: Vec<String> = validator
        .iter_errors(document)
        .map(|e| format!("{}: {}", e.instance_path, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::SchemaViolation { errors })
    }
}

/// Structural checks on a fully merged namespace.
///
/// # Errors
///
/// Returns [`Error::ShadowedBinding`] if a path shares its name with an
/// environment binding, or [`Error::Validation`] for an empty definition.
pub fn validate_namespace(namespace: &Namespace) -> Result<()> {
    check_shadowing(namespace)?;

    if let Some((name, _)) = namespace.paths.iter().find(|(_, tokens)| tokens.is_empty()) {
        return Err(Error::Validation {
            field: name.clone(),
            message: "path definition has no tokens".into(),
        });
    }

    Ok(())
}
