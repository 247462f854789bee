//! Output formatting for resolved paths.
//!
//! This module turns a name-to-path map (usually
//! [`TemplateSet::all_resolvable_paths`](crate::TemplateSet::all_resolvable_paths))
//! into shell export statements, Makefile assignments, or JSON.

mod formatters;
mod shell;

use indexmap::IndexMap;

use crate::Result;

pub use formatters::{ExportFormatter, JsonFormatter, MakeFormatter};
pub use shell::ShellType;

/// Trait for formatting resolved paths into different output formats.
pub trait OutputFormatter {
    /// Format the given paths, in map order.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., a path name that is
    /// not a valid variable name).
    fn format(&self, paths: &IndexMap<String, String>) -> Result<String>;
}

/// Available output formats for path exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Shell-specific export statements.
    Shell(ShellType),
    /// Makefile `name?=value` assignments.
    Make,
    /// JSON object.
    Json,
}

impl ExportFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Shell(shell) => Box::new(ExportFormatter::new(*shell)),
            Self::Make => Box::new(MakeFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }

    /// Format `paths` in this format.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying formatter.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexmap::IndexMap;
    /// use pathsjson::output::ExportFormat;
    ///
    /// let mut paths = IndexMap::new();
    /// paths.insert("raw_dir".to_string(), "data/raw".to_string());
    /// assert_eq!(ExportFormat::Make.format_exports(&paths).unwrap(), "raw_dir?=data/raw");
    /// ```
    pub fn format_exports(&self, paths: &IndexMap<String, String>) -> Result<String> {
        self.create_formatter().format(paths)
    }
}
