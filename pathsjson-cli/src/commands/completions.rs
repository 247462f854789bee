//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Installed binary name
const BIN_NAME: &str = "pathsjson";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_install_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!(
                "#   pathsjson completions bash > ~/.local/share/bash-completion/completions/pathsjson"
            );
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(pathsjson completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   pathsjson completions zsh > ~/.zsh/completions/_pathsjson");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!(
                "#   pathsjson completions fish > ~/.config/fish/completions/pathsjson.fish"
            );
        }
        Shell::PowerShell => {
            eprintln!("#   pathsjson completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
