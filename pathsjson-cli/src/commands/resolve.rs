//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which prints the concrete
//! path for one definition.

use clap::Args;
use pathsjson::Arguments;

use crate::error::CliError;
use crate::utils::{parse_keyword, GlobalOptions};

/// Resolve a path by name.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path name to resolve
    pub name: String,

    /// Positional values for the path's parameters, in order
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Bind a parameter by name
    #[arg(short, long = "keyword", value_name = "KEY=VALUE", value_parser = parse_keyword)]
    pub keywords: Vec<(String, String)>,

    /// Create the parent directory of the resolved path
    #[arg(long)]
    pub create_parent: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let paths = global.load_registry()?;

        let mut args = Arguments::positional(self.values);
        for (key, value) in self.keywords {
            args = args.with_keyword(key, value);
        }

        let resolution = paths.resolve(&self.name, &args)?;
        log::debug!("{} -> {resolution}", self.name);

        if self.create_parent {
            resolution.ensure_parent_dir()?;
        }

        println!("{resolution}");
        Ok(())
    }
}
