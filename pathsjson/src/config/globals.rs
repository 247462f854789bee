//! Per-user global definitions.
//!
//! A user may keep a `.paths.json` in their platform data directory. Its
//! bindings and paths are merged under every project namespace with lower
//! priority than the project's own definitions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::loader::{load_document, DEFAULT_TARGET_NAME};
use crate::config::schema::Namespace;
use crate::config::validator::validate_document;
use crate::error::{Error, Result};

/// Application directory name under the platform data directory.
const APP_DIR: &str = "pathsjson";

/// Location of the user globals file.
///
/// # Errors
///
/// Returns [`Error::NoDataDirectory`] if the platform data directory cannot
/// be determined.
pub fn user_globals_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(Error::NoDataDirectory)?;
    Ok(data_dir.join(APP_DIR).join(DEFAULT_TARGET_NAME))
}

/// Create an empty globals file at `path`.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`Error::GlobalsExist`] if the file exists and `overwrite` is
/// false, or an I/O error if it cannot be written.
pub fn create_user_globals_file(path: &Path, overwrite: bool) -> Result<PathBuf> {
    if path.exists() && !overwrite {
        return Err(Error::GlobalsExist {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, "{}")?;
    log::info!("created user globals at {}", path.display());

    Ok(path.to_path_buf())
}

/// Load the globals file at `path`.
///
/// Returns `Ok(None)` if there is no file.
///
/// # Errors
///
/// Returns an error if the file exists but is unreadable, is not valid
/// JSON, or violates the schema.
pub fn load_user_globals(path: &Path) -> Result<Option<Namespace>> {
    if !path.exists() {
        return Ok(None);
    }

    let document = load_document(path)?;
    validate_document(&document)?;
    Namespace::from_value(document).map(Some)
}

/// Merge `globals` under `namespace`.
///
/// Bindings missing from the project, or bound to `null` there, take the
/// global value. Paths missing from the project are appended in globals
/// order. Everything the project defines is left as is.
pub fn merge_globals(namespace: &mut Namespace, globals: Namespace) {
    for (name, value) in globals.env {
        match namespace.env.get_mut(&name) {
            Some(existing) => {
                if existing.is_none() {
                    *existing = value;
                }
            }
            None => {
                namespace.env.insert(name, value);
            }
        }
    }

    for (name, tokens) in globals.paths {
        namespace.paths.entry(name).or_insert(tokens);
    }
}

/// Load the globals file at `path` and merge it under `namespace`.
///
/// # Errors
///
/// Returns [`Error::GlobalsMissing`] if there is no file and `skip_noexist`
/// is false, or any error from [`load_user_globals`].
pub fn patch_with_user_globals(
    namespace: &mut Namespace,
    path: &Path,
    skip_noexist: bool,
) -> Result<()> {
    match load_user_globals(path)? {
        Some(globals) => {
            log::debug!("merging user globals from {}", path.display());
            merge_globals(namespace, globals);
            Ok(())
        }
        None if skip_noexist => {
            log::debug!("no user globals at {}", path.display());
            Ok(())
        }
        None => Err(Error::GlobalsMissing {
            path: path.to_path_buf(),
        }),
    }
}
