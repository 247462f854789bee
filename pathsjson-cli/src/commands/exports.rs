//! Exports command implementation.
//!
//! This module implements the `exports` command, which prints every path
//! that resolves without arguments in a form a shell, a Makefile or a JSON
//! consumer can read.

use clap::{Args, ValueEnum};
use pathsjson::output::{ExportFormat, ShellType};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Print every resolvable path as exports.
#[derive(Args)]
pub struct ExportsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "shell", ignore_case = true)]
    pub format: ExportsFormat,

    /// Shell dialect for the shell format (bash, zsh, fish, powershell)
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<String>,
}

/// Output format for the exports command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportsFormat {
    /// Shell export statements
    Shell,
    /// Makefile `?=` assignments
    Make,
    /// JSON object
    Json,
}

impl ExportsCommand {
    /// Execute the exports command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let format = match self.format {
            ExportsFormat::Shell => {
                let shell = match &self.shell {
                    Some(name) => ShellType::from_string(name)
                        .map_err(|e| CliError::InvalidArguments(e.to_string()))?,
                    None => ShellType::detect(),
                };
                ExportFormat::Shell(shell)
            }
            ExportsFormat::Make => ExportFormat::Make,
            ExportsFormat::Json => ExportFormat::Json,
        };

        let paths = global.load_registry()?.all_resolvable_paths()?;
        let output = format.format_exports(&paths)?;

        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }
}
