//! Error handling for the RUDP latency report exporter

use thiserror::Error;

/// Custom error types for the report exporter
#[derive(Error, Debug)]
pub enum ReportError {
    /// Invalid CLI usage or flag combinations
    #[error("Configuration error: {0}")]
    Config(String),

    /// A measurement record lacks a required field
    #[error("Missing field error: record {record}: required field \"{field}\" is absent or non-numeric")]
    MissingField {
        /// Zero-based index of the offending record in input order
        record: usize,
        /// Name of the required field
        field: String,
    },

    /// The output workbook could not be created or written
    #[error("Write error: {0}")]
    Write(String),
}

impl ReportError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new missing-field error
    pub fn missing_field<S: Into<String>>(record: usize, field: S) -> Self {
        Self::MissingField {
            record,
            field: field.into(),
        }
    }

    /// Create a new write error
    pub fn write_error<S: Into<String>>(message: S) -> Self {
        Self::Write(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::MissingField { .. } => "INPUT",
            Self::Write(_) => "WRITE",
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 1,           // Invalid configuration/usage
            Self::MissingField { .. } => 2, // Malformed input record
            Self::Write(_) => 5,            // I/O issues
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::MissingField { .. } => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Write(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Library error conversions
impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::write_error(error.to_string())
    }
}

/// Result type alias using our custom error
pub type Result<T> = std::result::Result<T, ReportError>;
