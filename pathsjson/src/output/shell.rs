//! Shell detection and export formatting.

use std::env;

use crate::Result;

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        if env::var("ZSH_VERSION").is_ok() {
            return Self::Zsh;
        }
        if env::var("FISH_VERSION").is_ok() {
            return Self::Fish;
        }
        if env::var("PSModulePath").is_ok() {
            return Self::PowerShell;
        }

        env::var("SHELL").map_or(Self::Bash, |shell| Self::from_shell_path(&shell))
    }

    /// Guess the shell from a `SHELL`-style executable path.
    #[must_use]
    pub fn from_shell_path(shell_path: &str) -> Self {
        if shell_path.contains("zsh") {
            Self::Zsh
        } else if shell_path.contains("fish") {
            Self::Fish
        } else if shell_path.contains("pwsh") || shell_path.contains("powershell") {
            Self::PowerShell
        } else {
            Self::Bash
        }
    }

    /// Parse a shell type from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - Shell name (case-insensitive): "bash", "zsh", "fish", "powershell", "pwsh"
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(crate::Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// Values are always double-quoted, with the characters the shell
    /// would otherwise interpret inside double quotes escaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsjson::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("raw_dir", "data/raw"), "export raw_dir=\"data/raw\"");
    /// assert_eq!(ShellType::Fish.format_export("raw_dir", "data/raw"), "set -x raw_dir \"data/raw\"");
    /// assert_eq!(ShellType::PowerShell.format_export("raw_dir", "data/raw"), "$env:raw_dir=\"data/raw\"");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => {
                format!("export {var}=\"{}\"", escape(value, '\\', &['\\', '"', '$', '`']))
            }
            Self::Fish => format!("set -x {var} \"{}\"", escape(value, '\\', &['\\', '"', '$'])),
            Self::PowerShell => {
                format!("$env:{var}=\"{}\"", escape(value, '`', &['`', '"', '$']))
            }
        }
    }
}

fn escape(value: &str, escape_char: char, special: &[char]) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if special.contains(&c) {
            out.push(escape_char);
        }
        out.push(c);
    }
    out
}
