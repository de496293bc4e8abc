//! RUDP Latency Report
//!
//! Reshapes recorded RUDP round-trip latency test runs into a two-sheet Excel
//! report: per-run summary statistics and flattened RTT histograms. The data
//! is embedded from the test logs; the tool is a one-shot transform-and-export
//! with no measurement or ingestion of its own.

pub mod app;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use error::{ReportError, Result};
pub use models::{HistogramRow, SummaryRow};
pub use report::{extract_summary, flatten_histograms, ReportWriter};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    /// Fixed location the original test logs were exported to
    pub const DEFAULT_OUTPUT_PATH: &str = "/mnt/d/rudp_results.xlsx";
}
