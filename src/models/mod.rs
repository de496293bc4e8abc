//! Data models for the RUDP latency report

pub mod record;

// Re-export main model types
pub use record::{HistogramRow, SummaryRow};
