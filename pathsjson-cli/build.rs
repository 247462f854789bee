//! Build script for pathsjson-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .global(true)
        .action(ArgAction::SetTrue)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathsjson")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths declared in .paths.json files")
        .long_about(
            "Command-line tool for declaring project paths once in a .paths.json file and resolving them anywhere in the project",
        )
        .arg(flag("verbose", "Enable verbose output"))
        .arg(flag("quiet", "Suppress non-essential output"))
        .arg(
            Arg::new("file")
                .long("file")
                .help("Use this definition file instead of searching for one")
                .value_name("PATH")
                .global(true)
                .env("PATHSJSON_FILE"),
        )
        .arg(
            Arg::new("src-dir")
                .long("src-dir")
                .help("Start the search for a definition file from this directory")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("target-name")
                .long("target-name")
                .help("Definition file name to search for")
                .value_name("NAME")
                .default_value(".paths.json")
                .global(true),
        )
        .arg(flag("no-env", "Ignore environment variable overrides"))
        .arg(flag("no-globals", "Ignore the user globals file"))
        .arg(
            Arg::new("globals-file")
                .long("globals-file")
                .help("Override the user globals file location")
                .value_name("PATH")
                .global(true)
                .env("PATHSJSON_GLOBALS_FILE"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a path by name")
                .long_about("Print the concrete path for a definition, binding its parameters from positional or KEY=VALUE arguments"),
            Command::new("list")
                .about("List defined paths")
                .long_about("Display defined path names in declaration order"),
            Command::new("expand")
                .about("Print the expanded definitions as JSON")
                .long_about("Show every definition with path references spliced in and parameters as [name, default] pairs"),
            Command::new("exports")
                .about("Print every resolvable path as exports")
                .long_about("Print every path that resolves without arguments as shell, Makefile or JSON exports"),
            Command::new("print-global-path")
                .about("Print the location of the user globals file")
                .long_about("Display the path of the per-user globals definition file"),
            Command::new("init-globals")
                .about("Create the user globals file")
                .long_about("Create an empty per-user globals definition file"),
            Command::new("init")
                .about("Create a .paths.json file")
                .long_about("Create a starter definition file in the current or given directory"),
            Command::new("validate")
                .about("Validate a definition file")
                .long_about("Check a definition file against the schema and for cycles and undefined references"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathsjson.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
