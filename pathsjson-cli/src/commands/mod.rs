//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a single path by name
//! - `list`: List defined path names
//! - `expand`: Print the expanded definitions
//! - `exports`: Print every resolvable path as shell, Makefile or JSON exports
//! - `print_global_path`: Show the user globals file location
//! - `init_globals`: Create the user globals file
//! - `init`: Create a definition file
//! - `validate`: Validate a definition file
//! - `completions`: Generate shell completions

pub mod completions;
pub mod expand;
pub mod exports;
pub mod init;
pub mod init_globals;
pub mod list;
pub mod print_global_path;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use expand::ExpandCommand;
pub use exports::ExportsCommand;
pub use init::InitCommand;
pub use init_globals::InitGlobalsCommand;
pub use list::ListCommand;
pub use print_global_path::PrintGlobalPathCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
