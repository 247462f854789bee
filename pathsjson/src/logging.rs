//! Logging infrastructure for the pathsjson library.
//!
//! The library itself only talks to the `log` facade. This module provides
//! the stderr backend the CLI installs, with three coarse verbosity levels.

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no CLI verbosity flag is given.
pub const LOG_MODE_VAR: &str = "PATHSJSON_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use pathsjson::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsjson::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level that passes at this setting.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr backend for the `log` facade.
///
/// # Examples
///
/// ```
/// use log::Log;
/// use pathsjson::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// let meta = log::Metadata::builder().level(log::Level::Debug).build();
/// assert!(!logger.enabled(&meta));
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let label = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug | Level::Trace => "DEBUG",
        };
        eprintln!("{label}: {}", record.args());
    }

    fn flush(&self) {}
}

/// Decide the log level from CLI flags and the `PATHSJSON_LOG_MODE` value.
///
/// The priority order is:
/// 1. CLI flags (`verbose` beats `quiet`)
/// 2. The environment value, if it parses
/// 3. Default (Normal)
///
/// # Examples
///
/// ```
/// use pathsjson::{resolve_level, LogLevel};
///
/// assert_eq!(resolve_level(false, false, None), LogLevel::Normal);
/// assert_eq!(resolve_level(false, false, Some("quiet")), LogLevel::Quiet);
/// assert_eq!(resolve_level(true, true, Some("quiet")), LogLevel::Verbose);
/// ```
#[must_use]
pub fn resolve_level(verbose: bool, quiet: bool, env_value: Option<&str>) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env_value
        .and_then(|value| LogLevel::parse(value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Installs the stderr logger as the global `log` backend.
///
/// Only the first call installs the backend. The backend itself accepts
/// every level and filtering goes through `log::max_level`, which each call
/// updates, so the returned level is always the one in effect.
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let env_value = env::var(LOG_MODE_VAR).ok();
    let level = resolve_level(verbose, quiet, env_value.as_deref());

    // Already installed is fine: the max level below still applies.
    let _ = log::set_boxed_logger(Box::new(Logger::new(LogLevel::Verbose)));
    log::set_max_level(level.filter());

    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
        assert!(LogLevel::Quiet < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("invalid").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled_by_level() {
        let normal = Logger::default();
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(normal.enabled(&warn));
        assert!(!normal.enabled(&info));

        let quiet = Logger::new(LogLevel::Quiet);
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!quiet.enabled(&error));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(&info));
        assert_eq!(verbose.level(), LogLevel::Verbose);
    }

    #[test]
    fn test_resolve_level_defaults() {
        assert_eq!(resolve_level(false, false, None), LogLevel::Normal);
    }

    #[test]
    fn test_resolve_level_flags() {
        assert_eq!(resolve_level(true, false, None), LogLevel::Verbose);
        assert_eq!(resolve_level(false, true, None), LogLevel::Quiet);
        assert_eq!(resolve_level(true, true, None), LogLevel::Verbose);
    }

    #[test]
    fn test_resolve_level_from_env_value() {
        assert_eq!(resolve_level(false, false, Some("verbose")), LogLevel::Verbose);
        assert_eq!(resolve_level(false, false, Some("quiet")), LogLevel::Quiet);
        // Unparseable values fall back to the default
        assert_eq!(resolve_level(false, false, Some("loud")), LogLevel::Normal);
        // CLI flag overrides the environment
        assert_eq!(resolve_level(true, false, Some("quiet")), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_later_call_takes_effect() {
        assert_eq!(init_logger(false, true), LogLevel::Quiet);
        assert_eq!(log::max_level(), LogLevel::Quiet.filter());

        assert_eq!(init_logger(true, false), LogLevel::Verbose);
        assert_eq!(log::max_level(), LogLevel::Verbose.filter());
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(log::logger().enabled(&debug));
    }
}
