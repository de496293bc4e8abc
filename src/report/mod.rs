//! Report generation pipeline
//!
//! Reshapes the measurement records into the two flat tables of the report
//! and writes them out as named sheets of a single workbook.

pub mod histogram;
pub mod summary;
pub mod writer;

pub use histogram::flatten_histograms;
pub use summary::extract_summary;
pub use writer::{ReportWriter, HISTOGRAMS_SHEET, SUMMARY_SHEET};
