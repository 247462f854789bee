//! Init-globals command implementation.
//!
//! Creates an empty user globals file, along with its parent directories.

use clap::Args;
use pathsjson::config::create_user_globals_file;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Create the user globals file.
#[derive(Args)]
pub struct InitGlobalsCommand {
    /// Replace an existing globals file
    #[arg(long)]
    pub overwrite: bool,
}

impl InitGlobalsCommand {
    /// Execute the init-globals command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.globals_path()?;
        let created = create_user_globals_file(&path, self.overwrite)?;

        if !global.quiet {
            eprintln!("Created globals file");
        }
        println!("{}", created.display());
        Ok(())
    }
}
