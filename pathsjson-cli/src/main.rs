//! Main entry point for the pathsjson CLI.
//!
//! This is the command-line interface for `.paths.json` definition files.
//! It provides commands for working with declared paths:
//! - `resolve`: Resolve one path, with optional arguments
//! - `list`: List defined paths
//! - `expand`: Show the expanded definitions
//! - `exports`: Export every resolvable path for a shell or Makefile
//! - `init` / `init-globals`: Create definition files

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = pathsjson::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        file: cli.file,
        src_dir: cli.src_dir,
        target_name: cli.target_name,
        no_env: cli.no_env,
        no_globals: cli.no_globals,
        globals_file: cli.globals_file,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Expand(cmd) => cmd.execute(&global),
        cli::Command::Exports(cmd) => cmd.execute(&global),
        cli::Command::PrintGlobalPath(cmd) => cmd.execute(&global),
        cli::Command::InitGlobals(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
