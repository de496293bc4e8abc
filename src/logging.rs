//! Console logging for the report exporter
//!
//! Slimmed-down leveled logging: timestamped lines on stderr, level gated by
//! the `--verbose`/`--debug` flags. The exporter is one-shot and synchronous,
//! so there is no log file sink and no aggregation.

use chrono::Local;
use std::io::{self, Write};

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug level - step-by-step pipeline tracing
    Debug = 0,
    /// Info level - general progress information
    Info = 1,
    /// Warning level - potentially harmful situations
    Warn = 2,
    /// Error level - failures surfaced before exit
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[36m", // Cyan
            LogLevel::Info => "\x1b[32m",  // Green
            LogLevel::Warn => "\x1b[33m",  // Yellow
            LogLevel::Error => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

/// Leveled console logger writing to stderr
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
    use_color: bool,
}

impl Logger {
    /// Create a logger with an explicit minimum level
    pub fn new(min_level: LogLevel, use_color: bool) -> Self {
        Self {
            min_level,
            use_color,
        }
    }

    /// Derive the logger level from CLI verbosity flags
    pub fn from_flags(verbose: bool, debug: bool, use_color: bool) -> Self {
        let min_level = if debug {
            LogLevel::Debug
        } else if verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        Self::new(min_level, use_color)
    }

    /// Check whether a message at `level` would be emitted
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Emit a message at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let line = self.format_line(level, message);
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "{}", line);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Format a single log line: `[HH:MM:SS.mmm] [LEVEL] message`
    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        if self.use_color {
            format!(
                "[{}] [{}{}{}] {}",
                timestamp,
                level.color_code(),
                level.as_str(),
                LogLevel::reset_code(),
                message
            )
        } else {
            format!("[{}] [{}] {}", timestamp, level.as_str(), message)
        }
    }
}
