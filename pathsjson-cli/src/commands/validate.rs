//! Validate command implementation.
//!
//! This module implements the `validate` command, which loads a definition
//! file through the same pipeline as every other command (globals, env
//! overrides, implicit bindings, schema) and then expands it to catch
//! cycles, undefined references and shadowed bindings.

use std::path::PathBuf;

use clap::Args;
use pathsjson::config::NamespaceBuilder;
use pathsjson::{Error as LibError, TemplateSet};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Validate a definition file.
#[derive(Args)]
pub struct ValidateCommand {
    /// File to validate; defaults to the file the other commands would load
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let builder = match self.file {
            Some(file) => global.namespace_builder().with_file(file),
            None => global.namespace_builder(),
        };

        match check(&builder) {
            Ok(()) => {
                if !global.quiet {
                    eprintln!("Definitions are valid");
                }
                Ok(())
            }
            Err(LibError::SchemaViolation { errors }) => {
                for error in &errors {
                    eprintln!("  {error}");
                }
                Err(CliError::Library(LibError::SchemaViolation { errors }))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn check(builder: &NamespaceBuilder) -> pathsjson::Result<()> {
    let loaded = builder.build()?;
    log::debug!("validating {}", loaded.source.display());
    TemplateSet::from_namespace(&loaded.namespace)?;
    Ok(())
}
