//! The `.paths.json` document model.
//!
//! A document is a JSON object. The reserved `__ENV` key holds environment
//! bindings (name to default value or `null`); every other key is a path
//! definition, an array of tokens.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// The reserved key holding environment bindings.
pub const ENV_KEY: &str = "__ENV";

/// Environment bindings: variable name to default value, `None` if unset.
pub type Bindings = IndexMap<String, Option<String>>;

/// A parsed `.paths.json` namespace.
///
/// Key order is preserved in both maps. It only affects output ordering,
/// never dependency resolution.
///
/// # Examples
///
/// ```
/// use pathsjson::config::Namespace;
///
/// let ns: Namespace = serde_json::from_str(
///     r#"{"__ENV": {"VERSION": "1.0.0"}, "data_dir": ["data"]}"#,
/// ).unwrap();
/// assert_eq!(ns.env["VERSION"].as_deref(), Some("1.0.0"));
/// assert_eq!(ns.paths["data_dir"], vec!["data".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Environment bindings from the `__ENV` key.
    #[serde(rename = "__ENV", default)]
    pub env: Bindings,

    /// Path definitions, in declaration order.
    #[serde(flatten)]
    pub paths: IndexMap<String, Vec<String>>,
}

impl Namespace {
    /// Create an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path definition.
    #[must_use]
    pub fn with_path<I, S>(mut self, name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths
            .insert(name.into(), tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Add an environment binding.
    #[must_use]
    pub fn with_binding(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.env.insert(name.into(), value.map(str::to_string));
        self
    }

    /// Convert a JSON document to a namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not have the namespace shape.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Convert the namespace back to its JSON document form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
