//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate the user globals file
//! - Sample definition files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The definitions most tests run against.
#[allow(dead_code)]
pub const SAMPLE: &str = r#"{
    "__ENV": {"VERSION": "1.0.0"},
    "data_dir": ["data"],
    "raw_dir": ["$data_dir", "raw"],
    "clean_dir": ["$data_dir", "clean"],
    "latest_data": ["$raw_dir", "$$VERSION", "data.csv"],
    "scoped": ["$data_dir", "$$PROJECT"]
}"#;

/// Test environment with an isolated project directory.
///
/// This struct provides:
/// - A temporary project directory that commands run in
/// - A globals file location inside it that does not exist until created
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the isolated user globals file
    pub globals_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let globals_file = temp_path.join("globals").join(".paths.json");

        Self {
            temp_dir,
            temp_path,
            globals_file,
        }
    }

    /// Create a test environment with [`SAMPLE`] written to `.paths.json`.
    pub fn with_sample() -> Self {
        let env = Self::new();
        env.write_definitions(SAMPLE);
        env
    }

    /// Get a bare command builder without any isolation.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("pathsjson").expect("Failed to find pathsjson binary")
    }

    /// Get a command builder running in the project directory.
    ///
    /// The user globals file points into the temp directory and variables
    /// that would change the loaded definitions are cleared.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path)
            .env("PATHSJSON_GLOBALS_FILE", &self.globals_file)
            .env_remove("PATHSJSON_FILE")
            .env_remove("PATHSJSON_LOG_MODE")
            .env_remove("VERSION")
            .env_remove("PROJECT");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `.paths.json` in the project directory.
    pub fn write_definitions(&self, contents: &str) -> PathBuf {
        self.write_file(".paths.json", contents)
    }

    /// Write a file relative to the project directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }
}

/// Join path components with the platform separator, plus a newline.
#[allow(dead_code)]
pub fn line(parts: &[&str]) -> String {
    let path: PathBuf = parts.iter().collect();
    format!("{}\n", path.display())
}
