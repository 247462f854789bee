//! Namespace loading pipeline.
//!
//! [`NamespaceBuilder`] turns a definition file on disk into a merged,
//! validated [`Namespace`]:
//!
//! 1. locate the file (explicit path, or an upward search)
//! 2. read and schema-validate the document
//! 3. merge user globals underneath
//! 4. apply environment overrides
//! 5. inject the implicit `_IMPLICIT_ROOT` and `_DRIVE_ROOT` bindings
//! 6. run structural validation

use std::path::{Path, PathBuf};

use crate::config::environment::{patch_with_env, EnvSnapshot};
use crate::config::globals::{patch_with_user_globals, user_globals_path};
use crate::config::loader::{find_file_asc, load_document, DEFAULT_TARGET_NAME};
use crate::config::schema::Namespace;
use crate::config::validator::{validate_document, validate_namespace};
use crate::error::{Error, Result};
use crate::path::absolute;

/// Binding holding the absolute directory of the loaded definition file.
pub const IMPLICIT_ROOT: &str = "_IMPLICIT_ROOT";

/// Binding holding the absolute filesystem root.
pub const DRIVE_ROOT: &str = "_DRIVE_ROOT";

/// Where environment overrides come from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EnvSource {
    /// Capture the process environment at build time.
    Process,
    /// Use a fixed snapshot.
    Snapshot(EnvSnapshot),
    /// No environment overrides.
    Disabled,
}

/// Where user globals come from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GlobalsSource {
    /// The platform default location.
    Default,
    /// An explicit file.
    File(PathBuf),
    /// No user globals.
    Disabled,
}

/// A namespace together with the file it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedNamespace {
    /// Absolute path of the definition file.
    pub source: PathBuf,
    /// The merged namespace.
    pub namespace: Namespace,
}

/// Builder for loading a namespace from disk.
///
/// The builder is `Clone` and holds no loaded state, so the same builder can
/// be run again to pick up changes.
///
/// # Examples
///
/// ```no_run
/// use pathsjson::config::{EnvSnapshot, NamespaceBuilder};
///
/// let loaded = NamespaceBuilder::new()
///     .with_src_dir("/path/to/project/src")
///     .with_env(EnvSnapshot::empty())
///     .skip_globals()
///     .build()
///     .unwrap();
///
/// println!("loaded {}", loaded.source.display());
/// ```
#[derive(Debug, Clone)]
pub struct NamespaceBuilder {
    file_path: Option<PathBuf>,
    src_dir: Option<PathBuf>,
    target_name: String,
    env: EnvSource,
    globals: GlobalsSource,
    add_implicit_root: bool,
    validate: bool,
}

impl Default for NamespaceBuilder {
    fn default() -> Self {
        Self {
            file_path: None,
            src_dir: None,
            target_name: DEFAULT_TARGET_NAME.to_string(),
            env: EnvSource::Process,
            globals: GlobalsSource::Default,
            add_implicit_root: true,
            validate: true,
        }
    }
}

impl NamespaceBuilder {
    /// Create a builder with default settings.
    ///
    /// Defaults: search upward from the current directory for
    /// `.paths.json`, apply the process environment and user globals, add
    /// implicit bindings, validate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load this file instead of searching for one.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Start the upward search from this directory.
    #[must_use]
    pub fn with_src_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.src_dir = Some(dir.into());
        self
    }

    /// Search for this file name instead of `.paths.json`.
    #[must_use]
    pub fn with_target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = name.into();
        self
    }

    /// Apply overrides from a fixed environment snapshot.
    #[must_use]
    pub fn with_env(mut self, snapshot: EnvSnapshot) -> Self {
        self.env = EnvSource::Snapshot(snapshot);
        self
    }

    /// Disable environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.env = EnvSource::Disabled;
        self
    }

    /// Read user globals from this file.
    #[must_use]
    pub fn with_globals_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.globals = GlobalsSource::File(path.into());
        self
    }

    /// Disable user globals.
    #[must_use]
    pub fn skip_globals(mut self) -> Self {
        self.globals = GlobalsSource::Disabled;
        self
    }

    /// Whether to inject the implicit root bindings.
    #[must_use]
    pub fn with_implicit_root(mut self, enabled: bool) -> Self {
        self.add_implicit_root = enabled;
        self
    }

    /// Whether to validate the document and the merged namespace.
    #[must_use]
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DefinitionNotFound`] if no file can be located, and
    /// any read, parse, validation or globals error along the way.
    pub fn build(&self) -> Result<LoadedNamespace> {
        let source = self.locate()?;
        log::debug!("loading namespace from {}", source.display());

        let document = load_document(&source)?;
        if self.validate {
            validate_document(&document)?;
        }
        let mut namespace = Namespace::from_value(document)?;

        self.apply_globals(&mut namespace)?;

        match &self.env {
            EnvSource::Process => patch_with_env(&mut namespace, &EnvSnapshot::from_process()),
            EnvSource::Snapshot(snapshot) => patch_with_env(&mut namespace, snapshot),
            EnvSource::Disabled => {}
        }

        if self.add_implicit_root {
            inject_special_variables(&mut namespace, &source)?;
        }

        if self.validate {
            validate_namespace(&namespace)?;
        }

        Ok(LoadedNamespace { source, namespace })
    }

    fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = &self.file_path {
            return absolute(path);
        }

        let start = match &self.src_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        find_file_asc(&start, &self.target_name, None).ok_or_else(|| Error::DefinitionNotFound {
            target_name: self.target_name.clone(),
            start,
        })
    }

    fn apply_globals(&self, namespace: &mut Namespace) -> Result<()> {
        let path = match &self.globals {
            GlobalsSource::Disabled => return Ok(()),
            GlobalsSource::File(path) => path.clone(),
            GlobalsSource::Default => match user_globals_path() {
                Ok(path) => path,
                Err(Error::NoDataDirectory) => {
                    log::warn!("skipping user globals: no user data directory");
                    return Ok(());
                }
                Err(e) => return Err(e),
            },
        };

        patch_with_user_globals(namespace, &path, true)
    }
}

/// Bind `_IMPLICIT_ROOT` and `_DRIVE_ROOT` for a file loaded from `source`.
///
/// Bindings that already hold a value are left alone.
///
/// # Errors
///
/// Returns an error if `source` cannot be made absolute or has no parent
/// directory.
pub fn inject_special_variables(namespace: &mut Namespace, source: &Path) -> Result<()> {
    let source = absolute(source)?;
    let root_dir = source.parent().ok_or_else(|| Error::InvalidPath {
        path: source.clone(),
        reason: "definition file has no parent directory".into(),
    })?;
    let drive_root = root_dir.ancestors().last().unwrap_or(root_dir);

    bind_if_unset(namespace, IMPLICIT_ROOT, root_dir);
    bind_if_unset(namespace, DRIVE_ROOT, drive_root);

    Ok(())
}

fn bind_if_unset(namespace: &mut Namespace, name: &str, value: &Path) {
    let slot = namespace.env.entry(name.to_string()).or_insert(None);
    if slot.is_none() {
        *slot = Some(value.to_string_lossy().into_owned());
    }
}
