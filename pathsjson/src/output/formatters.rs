//! Output formatter implementations.

use indexmap::IndexMap;

use crate::{Error, Result};

use super::{OutputFormatter, ShellType};

/// Validates that a string is a valid environment variable name.
///
/// Valid names must:
/// - Start with a letter or underscore
/// - Contain only letters, digits, and underscores
fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn check_var_name(name: &str) -> Result<()> {
    if is_valid_env_var_name(name) {
        Ok(())
    } else {
        Err(Error::Validation {
            field: "environment_variable".to_string(),
            message: format!(
                "invalid environment variable name '{name}': must contain only alphanumeric characters and underscores, and start with a letter or underscore"
            ),
        })
    }
}

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter for `shell`.
    #[must_use]
    pub fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, paths: &IndexMap<String, String>) -> Result<String> {
        let mut exports = Vec::with_capacity(paths.len());

        for (name, value) in paths {
            check_var_name(name)?;
            exports.push(self.shell.format_export(name, value));
        }

        Ok(exports.join("\n"))
    }
}

/// Formatter for Makefile `eval` assignments (`name?=value`).
pub struct MakeFormatter;

impl OutputFormatter for MakeFormatter {
    fn format(&self, paths: &IndexMap<String, String>) -> Result<String> {
        let mut lines = Vec::with_capacity(paths.len());

        for (name, value) in paths {
            check_var_name(name)?;
            lines.push(format!("{name}?={value}"));
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output, keeping declaration order.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, paths: &IndexMap<String, String>) -> Result<String> {
        serde_json::to_string_pretty(paths).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_paths() -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("data_dir".to_string(), "data".to_string());
        map.insert("raw_dir".to_string(), "data/raw".to_string());
        map
    }

    #[test]
    fn test_env_var_names() {
        assert!(is_valid_env_var_name("data_dir"));
        assert!(is_valid_env_var_name("_IMPLICIT"));
        assert!(is_valid_env_var_name("A1"));
        assert!(!is_valid_env_var_name(""));
        assert!(!is_valid_env_var_name("1abc"));
        assert!(!is_valid_env_var_name("raw-dir"));
        assert!(!is_valid_env_var_name("raw.dir"));
    }

    #[test]
    fn test_export_formatter_keeps_order() {
        let output = ExportFormatter::new(ShellType::Bash)
            .format(&sample_paths())
            .unwrap();
        assert_eq!(
            output,
            "export data_dir=\"data\"\nexport raw_dir=\"data/raw\""
        );
    }

    #[test]
    fn test_export_formatter_fish() {
        let output = ExportFormatter::new(ShellType::Fish)
            .format(&sample_paths())
            .unwrap();
        assert!(output.starts_with("set -x data_dir \"data\""));
    }

    #[test]
    fn test_export_formatter_rejects_bad_names() {
        let mut paths = sample_paths();
        paths.insert("raw-dir".to_string(), "x".to_string());
        let result = ExportFormatter::new(ShellType::Bash).format(&paths);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_make_formatter() {
        let output = MakeFormatter.format(&sample_paths()).unwrap();
        assert_eq!(output, "data_dir?=data\nraw_dir?=data/raw");
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&sample_paths()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["raw_dir"], "data/raw");

        let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["data_dir", "raw_dir"]);
    }

    #[test]
    fn test_empty_input() {
        let empty = IndexMap::new();
        assert_eq!(ExportFormatter::new(ShellType::Bash).format(&empty).unwrap(), "");
        assert_eq!(MakeFormatter.format(&empty).unwrap(), "");
        assert_eq!(JsonFormatter.format(&empty).unwrap(), "{}");
    }
}
