//! Common test utilities for integration tests.
//!
//! This module provides fixture paths and isolated builders for testing
//! the pathsjson library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pathsjson::{EnvSnapshot, NamespaceBuilder};

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write a definition file named `.paths.json` into `dir`.
#[allow(dead_code)]
pub fn write_definitions(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(".paths.json");
    fs::write(&path, contents).unwrap();
    path
}

/// A builder that ignores the process environment and user globals.
#[allow(dead_code)]
pub fn isolated_builder() -> NamespaceBuilder {
    NamespaceBuilder::new()
        .with_env(EnvSnapshot::empty())
        .skip_globals()
}

/// A builder for one of the fixture files.
#[allow(dead_code)]
pub fn fixture_builder(name: &str) -> NamespaceBuilder {
    isolated_builder().with_file(fixture_path(name))
}

/// Platform path join of `parts`, as a string.
#[allow(dead_code)]
pub fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}
