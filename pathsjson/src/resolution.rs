//! Resolved path values.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A concrete path produced by resolving a template.
///
/// # Examples
///
/// ```
/// use pathsjson::Resolution;
///
/// let resolution = Resolution::new("data/raw/data.csv");
/// assert_eq!(resolution.to_string(), "data/raw/data.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution {
    path: PathBuf,
}

impl Resolution {
    /// Wrap a resolved path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The resolved path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the resolution, returning the path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// Create the parent directory of the path if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                log::debug!("creating {}", parent.display());
                fs::create_dir_all(parent)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Open the path with `options`, creating missing parent directories
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a directory cannot be created or the file
    /// cannot be opened.
    pub fn open(&self, options: &OpenOptions) -> Result<File> {
        self.ensure_parent_dir()?;
        Ok(options.open(&self.path)?)
    }

    /// Create (or truncate) the file for writing, creating missing parent
    /// directories first.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a directory or the file cannot be created.
    pub fn create(&self) -> Result<File> {
        self.open(OpenOptions::new().write(true).create(true).truncate(true))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for Resolution {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<String> for Resolution {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
