//! Library exports for pathsjson-cli.
//!
//! This module exports the CLI structure for use by tooling that needs the
//! full command definition, such as documentation generators.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for documentation tooling
pub use cli::Cli;
