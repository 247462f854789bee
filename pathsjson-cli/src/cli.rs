//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pathsjson::config::DEFAULT_TARGET_NAME;

use crate::commands::{
    CompletionsCommand, ExpandCommand, ExportsCommand, InitCommand, InitGlobalsCommand,
    ListCommand, PrintGlobalPathCommand, ResolveCommand, ValidateCommand,
};

/// Resolve project paths declared in `.paths.json` files.
#[derive(Parser)]
#[command(name = "pathsjson")]
#[command(version, about = "Resolve paths declared in .paths.json files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this definition file instead of searching for one
    #[arg(long, value_name = "PATH", global = true, env = "PATHSJSON_FILE")]
    pub file: Option<PathBuf>,

    /// Start the search for a definition file from this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub src_dir: Option<PathBuf>,

    /// Definition file name to search for
    #[arg(long, value_name = "NAME", global = true, default_value = DEFAULT_TARGET_NAME)]
    pub target_name: String,

    /// Ignore environment variable overrides
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Ignore the user globals file
    #[arg(long, global = true)]
    pub no_globals: bool,

    /// Override the user globals file location
    #[arg(long, value_name = "PATH", global = true, env = "PATHSJSON_GLOBALS_FILE")]
    pub globals_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a path by name
    Resolve(ResolveCommand),

    /// List defined paths
    List(ListCommand),

    /// Print the expanded definitions as JSON
    Expand(ExpandCommand),

    /// Print every resolvable path as shell, Makefile or JSON exports
    Exports(ExportsCommand),

    /// Print the location of the user globals file
    PrintGlobalPath(PrintGlobalPathCommand),

    /// Create the user globals file
    InitGlobals(InitGlobalsCommand),

    /// Create a .paths.json file
    Init(InitCommand),

    /// Validate a definition file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
