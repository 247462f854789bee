//! Template registries.
//!
//! [`TemplateSet`] is the immutable result of expanding one namespace.
//! [`PathsJson`] owns the current set and can rebuild it from disk, swapping
//! the new set in atomically so concurrent readers always see a complete,
//! consistent view.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;

use crate::config::{Namespace, NamespaceBuilder};
use crate::error::{Error, Result};
use crate::expand::expand;
use crate::resolution::Resolution;
use crate::template::{Arguments, PathTemplate};

/// An immutable, ordered mapping from path name to template.
///
/// # Examples
///
/// ```
/// use pathsjson::config::Namespace;
/// use pathsjson::{Arguments, TemplateSet};
///
/// let ns = Namespace::new()
///     .with_binding("VERSION", Some("1.0.0"))
///     .with_path("data_dir", ["data"])
///     .with_path("latest", ["$data_dir", "$$VERSION"]);
/// let set = TemplateSet::from_namespace(&ns).unwrap();
///
/// let args = Arguments::positional(["2.0.0"]);
/// assert!(set.resolve_path("latest", &args).unwrap().ends_with("2.0.0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    templates: IndexMap<String, PathTemplate>,
    source: Option<PathBuf>,
}

impl TemplateSet {
    /// Expand `namespace` and build a template for every path.
    ///
    /// # Errors
    ///
    /// Returns any expansion error; no partial set is ever produced.
    pub fn from_namespace(namespace: &Namespace) -> Result<Self> {
        let templates = expand(namespace)?
            .into_iter()
            .map(|(name, segments)| {
                let template = PathTemplate::from_segments(&segments);
                (name, template)
            })
            .collect();

        Ok(Self {
            templates,
            source: None,
        })
    }

    /// Record the file this set was loaded from.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The file this set was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Look up a template.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathTemplate> {
        self.templates.get(name)
    }

    /// Path names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Iterate over names and templates, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathTemplate)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Resolve `name` to a concrete path string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPath`] for an undefined name, or an argument
    /// arity error from [`PathTemplate::resolve`].
    pub fn resolve_path(&self, name: &str, args: &Arguments) -> Result<String> {
        self.get(name)
            .ok_or_else(|| Error::UnknownPath {
                name: name.to_string(),
            })?
            .resolve(args)
    }

    /// Resolve `name` to a [`Resolution`].
    ///
    /// # Errors
    ///
    /// Same as [`resolve_path`](Self::resolve_path).
    pub fn resolve(&self, name: &str, args: &Arguments) -> Result<Resolution> {
        self.resolve_path(name, args).map(Resolution::from)
    }

    /// Every path that resolves without arguments, in declaration order.
    ///
    /// Templates with a required parameter that has no default are skipped.
    ///
    /// # Errors
    ///
    /// Returns any resolution failure other than a missing argument.
    pub fn all_resolvable_paths(&self) -> Result<IndexMap<String, String>> {
        let no_args = Arguments::new();
        let mut paths = IndexMap::with_capacity(self.templates.len());

        for (name, template) in &self.templates {
            match template.resolve(&no_args) {
                Ok(path) => {
                    paths.insert(name.clone(), path);
                }
                Err(Error::MissingArguments { .. }) => {
                    log::debug!("{name} needs arguments, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(paths)
    }
}

impl fmt::Display for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.names().collect();
        keys.sort_unstable();
        write!(f, "PathsJson(KEYS=[{}])", keys.join(", "))
    }
}

/// A reloadable registry of path templates.
///
/// Reads go through an [`Arc`] snapshot of the current [`TemplateSet`], so
/// a reader holding a snapshot is never affected by a concurrent reload.
///
/// # Examples
///
/// ```no_run
/// use pathsjson::{Arguments, PathsJson};
/// use pathsjson::config::NamespaceBuilder;
///
/// let paths = PathsJson::load(NamespaceBuilder::new()).unwrap();
/// let clean = paths.resolve("clean_dir", &Arguments::new()).unwrap();
/// println!("{clean}");
/// ```
#[derive(Debug)]
pub struct PathsJson {
    current: RwLock<Arc<TemplateSet>>,
    builder: Option<NamespaceBuilder>,
}

impl PathsJson {
    /// Load a registry by running `builder`.
    ///
    /// The builder is kept for [`reload`](Self::reload).
    ///
    /// # Errors
    ///
    /// Returns any loading or expansion error.
    pub fn load(builder: NamespaceBuilder) -> Result<Self> {
        let set = Self::build_set(&builder)?;
        Ok(Self {
            current: RwLock::new(Arc::new(set)),
            builder: Some(builder),
        })
    }

    /// Build a registry from an in-memory namespace.
    ///
    /// Such a registry cannot be reloaded.
    ///
    /// # Errors
    ///
    /// Returns any expansion error.
    pub fn from_namespace(namespace: &Namespace) -> Result<Self> {
        Ok(Self {
            current: RwLock::new(Arc::new(TemplateSet::from_namespace(namespace)?)),
            builder: None,
        })
    }

    /// The current template set.
    #[must_use]
    pub fn snapshot(&self) -> Arc<TemplateSet> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// See [`TemplateSet::resolve_path`].
    ///
    /// # Errors
    ///
    /// Same as [`TemplateSet::resolve_path`].
    pub fn resolve_path(&self, name: &str, args: &Arguments) -> Result<String> {
        self.snapshot().resolve_path(name, args)
    }

    /// See [`TemplateSet::resolve`].
    ///
    /// # Errors
    ///
    /// Same as [`TemplateSet::resolve_path`].
    pub fn resolve(&self, name: &str, args: &Arguments) -> Result<Resolution> {
        self.snapshot().resolve(name, args)
    }

    /// See [`TemplateSet::all_resolvable_paths`].
    ///
    /// # Errors
    ///
    /// Same as [`TemplateSet::all_resolvable_paths`].
    pub fn all_resolvable_paths(&self) -> Result<IndexMap<String, String>> {
        self.snapshot().all_resolvable_paths()
    }

    /// Path names of the current set, in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.snapshot().names().map(str::to_string).collect()
    }

    /// The file the current set was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<PathBuf> {
        self.snapshot().source().map(Path::to_path_buf)
    }

    /// Rebuild the set from disk and publish it.
    ///
    /// On failure the current set stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the registry was not loaded from a
    /// builder, or any loading or expansion error.
    pub fn reload(&self) -> Result<()> {
        let builder = self.builder.as_ref().ok_or_else(|| Error::Validation {
            field: "reload".into(),
            message: "registry was not loaded from a definition file".into(),
        })?;

        let set = Arc::new(Self::build_set(builder)?);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = set;
        log::debug!("reloaded {} path templates", guard.len());

        Ok(())
    }

    fn build_set(builder: &NamespaceBuilder) -> Result<TemplateSet> {
        let loaded = builder.build()?;
        Ok(TemplateSet::from_namespace(&loaded.namespace)?.with_source(loaded.source))
    }
}

impl fmt::Display for PathsJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
