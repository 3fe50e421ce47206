//! Leveled logging for the bootstrap sequence.
//!
//! This module provides a threshold-gated logger writing to standard output.
//! The threshold is taken from the [`Environment`] snapshot at construction
//! time; individual log calls never touch ambient process state.

use std::fmt;

use crate::config::Environment;

/// Environment variable holding the logging threshold.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Fixed usage line for the `log` invocation.
pub const LOG_USAGE: &str = "Usage: log <LEVEL> <message>";

/// Logging severity, ordered from most to least verbose.
///
/// # Examples
///
/// ```
/// use ftpinit::LogLevel;
///
/// assert!(LogLevel::Debug < LogLevel::Info);
/// assert!(LogLevel::Warn < LogLevel::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Diagnostic detail, suppressed by default.
    Debug,
    /// Normal progress messages. The default threshold.
    Info,
    /// Something looks wrong but the bootstrap can continue.
    Warn,
    /// A failure worth surfacing regardless of verbosity.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes `DEBUG`, `INFO`, `WARN`, `ERROR` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a recognized level name.
    /// Callers that treat unrecognized levels as "do not emit" simply drop
    /// the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ftpinit::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
    /// assert_eq!(LogLevel::parse("warn").unwrap(), LogLevel::Warn);
    /// assert!(LogLevel::parse("INVALID").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A threshold-gated logger writing `[LEVEL] message` lines to stdout.
///
/// # Examples
///
/// ```
/// use ftpinit::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Info);
/// logger.info("bootstrap started");
/// logger.debug("this is suppressed");
/// ```
pub struct Logger {
    threshold: LogLevel,
}

impl Logger {
    /// Creates a logger with the given threshold.
    #[must_use]
    pub const fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    /// Creates a logger with the threshold taken from `LOG_LEVEL`.
    ///
    /// Unset or unrecognized values fall back to [`LogLevel::Info`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ftpinit::config::Environment;
    /// use ftpinit::{LogLevel, Logger};
    ///
    /// let env = Environment::from_iter([("LOG_LEVEL", "DEBUG")]);
    /// let logger = Logger::from_env(&env);
    /// assert_eq!(logger.threshold(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn from_env(env: &Environment) -> Self {
        let threshold = env
            .get(LOG_LEVEL_VAR)
            .and_then(|value| LogLevel::parse(value).ok())
            .unwrap_or(LogLevel::Info);
        Self::new(threshold)
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Logs a message at the given level.
    ///
    /// Writes exactly `[<LEVEL>] <message>` to stdout when `level` is at or
    /// above the threshold; otherwise does nothing. An empty message still
    /// produces a line (with a trailing space after the level tag).
    pub fn log(&self, level: LogLevel, message: &str) {
        if level >= self.threshold {
            println!("[{level}] {message}");
        }
    }

    /// Logs a diagnostic message.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs a progress message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Debug), "DEBUG");
        assert_eq!(format!("{}", LogLevel::Info), "INFO");
        assert_eq!(format!("{}", LogLevel::Warn), "WARN");
        assert_eq!(format!("{}", LogLevel::Error), "ERROR");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::parse("INFO").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::parse("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::parse("ERROR").unwrap(), LogLevel::Error);

        // Case insensitive
        assert_eq!(LogLevel::parse("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::parse("Error").unwrap(), LogLevel::Error);

        // Invalid
        assert!(LogLevel::parse("INVALID").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_threshold() {
        let logger = Logger::new(LogLevel::Warn);
        assert_eq!(logger.threshold(), LogLevel::Warn);
    }

    #[test]
    fn test_logger_default_is_info() {
        assert_eq!(Logger::default().threshold(), LogLevel::Info);
    }

    #[test]
    fn test_from_env_reads_threshold() {
        let env = Environment::from_iter([("LOG_LEVEL", "ERROR")]);
        assert_eq!(Logger::from_env(&env).threshold(), LogLevel::Error);
    }

    #[test]
    fn test_from_env_unset_defaults_to_info() {
        let env = Environment::empty();
        assert_eq!(Logger::from_env(&env).threshold(), LogLevel::Info);
    }

    #[test]
    fn test_from_env_invalid_defaults_to_info() {
        let env = Environment::from_iter([("LOG_LEVEL", "LOUD")]);
        assert_eq!(Logger::from_env(&env).threshold(), LogLevel::Info);
    }

    // The line format itself ("[LEVEL] message" on stdout, filtering, the
    // empty-message trailing space) is asserted end to end by the CLI
    // integration tests, where stdout capture is natural.
}
