//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including namespace loading, globals file resolution, and argument
//! parsing helpers.

use std::path::PathBuf;

use pathsjson::config::{user_globals_path, NamespaceBuilder};
use pathsjson::{EnvSnapshot, PathsJson};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit definition file.
    pub file: Option<PathBuf>,

    /// Directory to start the upward search from.
    pub src_dir: Option<PathBuf>,

    /// File name to search for.
    pub target_name: String,

    /// Ignore environment variable overrides.
    pub no_env: bool,

    /// Ignore user globals.
    pub no_globals: bool,

    /// Override the user globals file location.
    pub globals_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Build the namespace loader described by these options.
    pub fn namespace_builder(&self) -> NamespaceBuilder {
        let mut builder = NamespaceBuilder::new().with_target_name(&self.target_name);

        if let Some(file) = &self.file {
            builder = builder.with_file(file);
        }
        if let Some(dir) = &self.src_dir {
            builder = builder.with_src_dir(dir);
        }

        builder = if self.no_env {
            builder.skip_env()
        } else {
            builder.with_env(EnvSnapshot::from_process())
        };

        if self.no_globals {
            builder.skip_globals()
        } else if let Some(globals) = &self.globals_file {
            builder.with_globals_file(globals)
        } else {
            builder
        }
    }

    /// Load the path registry.
    pub fn load_registry(&self) -> Result<PathsJson, CliError> {
        Ok(PathsJson::load(self.namespace_builder())?)
    }

    /// The user globals file to use.
    pub fn globals_path(&self) -> Result<PathBuf, CliError> {
        match &self.globals_file {
            Some(path) => Ok(path.clone()),
            None => Ok(user_globals_path()?),
        }
    }
}

/// Parse a `KEY=VALUE` keyword argument.
pub fn parse_keyword(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;

    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }

    Ok((key.to_string(), value.to_string()))
}
