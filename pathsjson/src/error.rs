//! Error types for the pathsjson library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathsjson error.
///
/// # Examples
///
/// ```
/// use pathsjson::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("data/raw".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathsjson library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path reference could not be satisfied, or the definitions contain a
    /// cycle.
    #[error("Resolve failed on {name}")]
    ResolveFailed {
        /// The path definition whose references could not be resolved.
        name: String,
    },

    /// A template was resolved without a value for a parameter that has no
    /// default.
    #[error("Expected args: {expected}")]
    MissingArguments {
        /// All parameter names of the template, comma separated.
        expected: String,
    },

    /// A template was resolved with more arguments than it has parameters.
    #[error("Too many args. Expected: {expected}")]
    TooManyArguments {
        /// All parameter names of the template, comma separated.
        expected: String,
    },

    /// The requested path name is not defined.
    #[error("unknown path: {name}")]
    UnknownPath {
        /// The name that was looked up.
        name: String,
    },

    /// A path definition uses the same name as an environment binding.
    #[error("path '{name}' shadows an environment binding of the same name")]
    ShadowedBinding {
        /// The conflicting name.
        name: String,
    },

    /// A document does not conform to the `.paths.json` schema.
    #[error("schema violation: {}", errors.join("; "))]
    SchemaViolation {
        /// Every violation found, prefixed with its JSON pointer.
        errors: Vec<String>,
    },

    /// No definition file was found while walking up from a directory.
    #[error("No `{target_name}` file found from {}", start.display())]
    DefinitionNotFound {
        /// The file name that was searched for.
        target_name: String,
        /// The directory the search started from.
        start: PathBuf,
    },

    /// Refused to overwrite an existing user globals file.
    #[error("Will not overwrite: {}", path.display())]
    GlobalsExist {
        /// The existing globals file.
        path: PathBuf,
    },

    /// The user globals file was required but does not exist.
    #[error("User globals missing at: {}", path.display())]
    GlobalsMissing {
        /// The expected globals file location.
        path: PathBuf,
    },

    /// The platform user data directory could not be determined.
    #[error("cannot determine the user data directory")]
    NoDataDirectory,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if error is a per-call argument arity failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsjson::Error;
    ///
    /// let err = Error::MissingArguments { expected: "VERSION".into() };
    /// assert!(err.is_argument_error());
    /// ```
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::MissingArguments { .. } | Self::TooManyArguments { .. }
        )
    }

    /// Check if error indicates that a file or name does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownPath { .. } | Self::DefinitionNotFound { .. } | Self::GlobalsMissing { .. }
        )
    }
}
