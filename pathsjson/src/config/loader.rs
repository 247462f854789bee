//! Definition file discovery and loading.
//!
//! This module finds `.paths.json` files by walking up the directory tree
//! and parses them into order-preserving JSON values.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::path::absolute;

/// The conventional name of a definition file.
pub const DEFAULT_TARGET_NAME: &str = ".paths.json";

/// Find `target_name` in `start_dir` or the nearest ancestor containing it.
///
/// `limit` bounds the number of directories visited, starting with
/// `start_dir` itself. `Some(0)` visits nothing and `None` walks all the way
/// to the filesystem root.
///
/// # Examples
///
/// ```no_run
/// use pathsjson::config::{find_file_asc, DEFAULT_TARGET_NAME};
/// use std::path::Path;
///
/// if let Some(found) = find_file_asc(Path::new("."), DEFAULT_TARGET_NAME, None) {
///     println!("using {}", found.display());
/// }
/// ```
#[must_use]
pub fn find_file_asc(start_dir: &Path, target_name: &str, limit: Option<usize>) -> Option<PathBuf> {
    let mut current = match absolute(start_dir) {
        Ok(dir) => dir,
        Err(e) => {
            log::debug!("cannot make {} absolute: {e}", start_dir.display());
            return None;
        }
    };
    let mut visited = 0usize;

    loop {
        if limit.is_some_and(|max| visited >= max) {
            return None;
        }
        visited += 1;

        let candidate = current.join(target_name);
        if candidate.exists() {
            log::info!("found {}", candidate.display());
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Locate a definition file from `start_dir`, failing if none exists.
///
/// # Errors
///
/// Returns [`Error::DefinitionNotFound`] if the walk finds nothing.
pub fn locate(start_dir: &Path, target_name: &str) -> Result<PathBuf> {
    find_file_asc(start_dir, target_name, None).ok_or_else(|| Error::DefinitionNotFound {
        target_name: target_name.to_string(),
        start: start_dir.to_path_buf(),
    })
}

/// Read and parse a JSON document, preserving key order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read definition file: {e}"),
    })?;

    serde_json::from_str(&contents).map_err(|e| Error::Validation {
        field: format!("{}", path.display()),
        message: format!("Invalid JSON: {e}"),
    })
}
