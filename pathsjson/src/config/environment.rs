//! Environment variable overrides for namespaces.
//!
//! Variables are never read implicitly. Callers take an [`EnvSnapshot`]
//! (usually [`EnvSnapshot::from_process`]) and pass it to
//! [`patch_with_env`], which keeps library behavior reproducible in tests.

use std::env;

use indexmap::IndexMap;

use crate::config::schema::Namespace;

/// An ordered, immutable copy of environment variables.
///
/// # Examples
///
/// ```
/// use pathsjson::config::EnvSnapshot;
///
/// let env = EnvSnapshot::from_iter([("VERSION", "2.0.0")]);
/// assert_eq!(env.get("VERSION"), Some("2.0.0"));
/// assert_eq!(env.get("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: IndexMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            vars: env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// A snapshot with no variables.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Iterate over variables in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Apply environment overrides to a namespace in place.
///
/// A variable naming an environment binding replaces the binding's value. A
/// variable naming a path definition replaces that definition with the
/// single literal token holding the value. Other variables are ignored.
///
/// # Examples
///
/// ```
/// use pathsjson::config::{patch_with_env, EnvSnapshot, Namespace};
///
/// let mut ns = Namespace::new()
///     .with_binding("VERSION", None)
///     .with_path("data_dir", ["data"]);
/// let env = EnvSnapshot::from_iter([("VERSION", "2.0"), ("data_dir", "/mnt/data")]);
///
/// patch_with_env(&mut ns, &env);
/// assert_eq!(ns.env["VERSION"].as_deref(), Some("2.0"));
/// assert_eq!(ns.paths["data_dir"], vec!["/mnt/data".to_string()]);
/// ```
pub fn patch_with_env(namespace: &mut Namespace, snapshot: &EnvSnapshot) {
    for (name, value) in snapshot.iter() {
        if let Some(binding) = namespace.env.get_mut(name) {
            log::debug!("environment overrides binding {name}");
            *binding = Some(value.to_string());
        } else if let Some(tokens) = namespace.paths.get_mut(name) {
            log::debug!("environment overrides path {name}");
            *tokens = vec![value.to_string()];
        }
    }
}
