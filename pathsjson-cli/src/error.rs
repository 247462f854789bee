//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;

use pathsjson::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// No definition file could be located.
    NoDefinitionFile(String),

    /// Semantic failure (e.g., a file that should not be overwritten) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (unknown path, wrong number of arguments)
    /// - 2: No `.paths.json` found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration or schema error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::UnknownPath { .. }
                | LibError::MissingArguments { .. }
                | LibError::TooManyArguments { .. }
                | LibError::GlobalsExist { .. } => 1,
                LibError::DefinitionNotFound { .. } => 2,
                LibError::Io(_) => 5,
                LibError::ResolveFailed { .. }
                | LibError::ShadowedBinding { .. }
                | LibError::SchemaViolation { .. }
                | LibError::GlobalsMissing { .. }
                | LibError::NoDataDirectory
                | LibError::Validation { .. }
                | LibError::Json(_) => 7,
                _ => 6,
            },
            CliError::NoDefinitionFile(_) => 2,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::NoDefinitionFile(msg) => write!(f, "{msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(io) => CliError::Io(io),
            e @ LibError::DefinitionNotFound { .. } => CliError::NoDefinitionFile(e.to_string()),
            e => CliError::Library(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
