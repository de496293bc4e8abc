//! Measurement records and report row models
//!
//! Input records are loosely-keyed JSON objects straight out of the RUDP test
//! logs; required fields are pulled out through the `require_*` accessors so a
//! malformed record surfaces as a missing-field error instead of a panic.
//! Output rows are the typed shapes the two report sheets are built from.

use crate::error::{ReportError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Field names of a measurement record, as they appear in the test logs
pub mod fields {
    pub const FRAMES: &str = "Frames";
    pub const SAMPLES: &str = "Samples";
    pub const MIN_RTT: &str = "Min RTT (ms)";
    pub const MAX_RTT: &str = "Max RTT (ms)";
    pub const AVG_RTT: &str = "Average RTT (ms)";
    pub const HISTOGRAM: &str = "Histogram";
}

/// Extract a required unsigned integer field from a record
pub fn require_u64(record: &Value, index: usize, field: &str) -> Result<u64> {
    record
        .get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| ReportError::missing_field(index, field))
}

/// Extract a required floating-point field from a record
pub fn require_f64(record: &Value, index: usize, field: &str) -> Result<f64> {
    record
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| ReportError::missing_field(index, field))
}

/// Extract the required histogram mapping from a record
///
/// The returned map iterates in insertion order (serde_json `preserve_order`),
/// which is the order the buckets were logged in.
pub fn require_histogram<'a>(record: &'a Value, index: usize) -> Result<&'a Map<String, Value>> {
    record
        .get(fields::HISTOGRAM)
        .and_then(Value::as_object)
        .ok_or_else(|| ReportError::missing_field(index, fields::HISTOGRAM))
}

/// One row of the "Summary" sheet: the five scalar stats of a single test run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Total simulated frames in the run
    pub frames: u64,
    /// Number of RTT samples taken (usually, but not necessarily, == frames)
    pub samples: u64,
    pub min_rtt_ms: f64,
    pub max_rtt_ms: f64,
    pub avg_rtt_ms: f64,
}

impl SummaryRow {
    /// Header row of the "Summary" sheet, in column order
    pub const COLUMNS: [&'static str; 5] = [
        fields::FRAMES,
        fields::SAMPLES,
        fields::MIN_RTT,
        fields::MAX_RTT,
        fields::AVG_RTT,
    ];

    /// Project a measurement record down to its five scalar fields
    pub fn from_record(index: usize, record: &Value) -> Result<Self> {
        Ok(Self {
            frames: require_u64(record, index, fields::FRAMES)?,
            samples: require_u64(record, index, fields::SAMPLES)?,
            min_rtt_ms: require_f64(record, index, fields::MIN_RTT)?,
            max_rtt_ms: require_f64(record, index, fields::MAX_RTT)?,
            avg_rtt_ms: require_f64(record, index, fields::AVG_RTT)?,
        })
    }
}

/// One row of the "Histograms" sheet: a single (run, bucket) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramRow {
    /// Frames value of the owning run; a label, not a unique key
    pub frames: u64,
    /// Opaque bucket label, e.g. "0-1 ms"; never parsed or sorted
    pub bucket: String,
    /// Occurrence count for this bucket
    pub count: u64,
}

impl HistogramRow {
    /// Header row of the "Histograms" sheet, in column order
    pub const COLUMNS: [&'static str; 3] = [fields::FRAMES, "Bucket (ms)", "Count"];
}
