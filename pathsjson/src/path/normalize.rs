//! Path normalization functions.
//!
//! Two flavors are provided:
//! - [`normpath`]: purely lexical cleanup of a resolved template string.
//!   Relative paths stay relative and leading `..` components are kept.
//! - [`absolute`]: make a path absolute against the current directory and
//!   resolve `.` and `..` components.

use std::env;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Lexically normalize a path string.
///
/// Collapses redundant separators and `.` components and folds `a/..`
/// pairs. A `..` directly under the root is dropped; leading `..` in a
/// relative path is kept. An empty result is `"."`.
///
/// # Examples
///
/// ```
/// use pathsjson::path::normalize::normpath;
///
/// assert_eq!(normpath("data/./raw//1.0.0"), "data/raw/1.0.0");
/// assert_eq!(normpath("data/raw/../clean"), "data/clean");
/// assert_eq!(normpath("../shared/data"), "../shared/data");
/// assert_eq!(normpath(""), ".");
/// ```
#[must_use]
pub fn normpath(path: &str) -> String {
    let mut result = PathBuf::new();
    let mut has_root = false;
    let mut leading_parents = 0usize;
    let mut parts: Vec<&OsStr> = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() && !has_root {
                    leading_parents += 1;
                }
            }
            Component::Normal(part) => parts.push(part),
        }
    }

    for _ in 0..leading_parents {
        result.push("..");
    }
    for part in parts {
        result.push(part);
    }

    if result.as_os_str().is_empty() {
        return ".".to_string();
    }
    result.to_string_lossy().into_owned()
}

/// Resolve `.` and `..` components in an absolute path.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components that would
/// escape the root directory.
///
/// # Examples
///
/// ```
/// use pathsjson::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)".to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Make a path absolute and resolve its `.` and `..` components.
///
/// Symlinks are not followed and the path does not need to exist.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or the
/// path escapes the root.
///
/// # Examples
///
/// ```
/// use pathsjson::path::normalize::absolute;
/// use std::path::Path;
///
/// assert!(absolute(Path::new("./src")).unwrap().is_absolute());
/// ```
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(path)
    };

    resolve_components(&absolute)
}
