//! Print-global-path command implementation.

use clap::Args;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Print the location of the user globals file.
#[derive(Args)]
pub struct PrintGlobalPathCommand {}

impl PrintGlobalPathCommand {
    /// Execute the print-global-path command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", global.globals_path()?.display());
        Ok(())
    }
}
