//! Expand command implementation.
//!
//! Prints the fully expanded definitions as JSON. Literals appear as
//! strings and parameters as `[name, default]` pairs.

use clap::Args;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Print the expanded definitions.
#[derive(Args)]
pub struct ExpandCommand {}

impl ExpandCommand {
    /// Execute the expand command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loaded = global.namespace_builder().build()?;
        let expansion = pathsjson::expand(&loaded.namespace)?;

        let json = serde_json::to_string_pretty(&expansion)
            .map_err(|e| CliError::SemanticFailure(format!("Failed to serialize: {e}")))?;
        println!("{json}");
        Ok(())
    }
}
