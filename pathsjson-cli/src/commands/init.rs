//! Init command implementation.
//!
//! This module implements the `init` command for creating a starter
//! definition file in a project directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Serializer};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Create a definition file.
#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the file in
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = match self.dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let path = dir.join(&global.target_name);

        if path.exists() {
            return Err(CliError::SemanticFailure(format!(
                "{} already exists",
                path.display()
            )));
        }

        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        json!({ "__ENV": {} })
            .serialize(&mut serializer)
            .map_err(|e| CliError::SemanticFailure(format!("Failed to serialize: {e}")))?;
        buffer.push(b'\n');

        fs::create_dir_all(&dir)?;
        fs::write(&path, buffer)?;
        log::info!("created {}", path.display());

        println!("{}", path.display());
        Ok(())
    }
}
