//! List command implementation.
//!
//! This module implements the `list` command, which displays the defined
//! path names in declaration order.

use clap::Args;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// List defined paths.
#[derive(Args)]
pub struct ListCommand {
    /// Show each template and its parameters
    #[arg(short, long)]
    pub long: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let set = global.load_registry()?.snapshot();

        if let Some(source) = set.source() {
            log::info!("definitions from {}", source.display());
        }

        for (name, template) in set.iter() {
            if !self.long {
                println!("{name}");
                continue;
            }

            let params: Vec<String> = template
                .arg_names()
                .iter()
                .zip(template.defaults())
                .map(|(arg, default)| match default {
                    Some(value) => format!("{arg}={value}"),
                    None => arg.clone(),
                })
                .collect();

            if params.is_empty() {
                println!("{name}\t{}", template.skeleton());
            } else {
                println!("{name}\t{}\t[{}]", template.skeleton(), params.join(", "));
            }
        }

        Ok(())
    }
}
