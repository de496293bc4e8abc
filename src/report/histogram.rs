//! Histogram flattening: one row per (run, bucket) pair

use crate::error::{ReportError, Result};
use crate::models::record::{fields, require_histogram, require_u64};
use crate::models::HistogramRow;
use serde_json::Value;

/// Expand every record's bucket map into rows tagged with the run's Frames.
///
/// Rows preserve record order, then within-record bucket insertion order.
/// Bucket labels pass through untouched; they are opaque strings here, never
/// parsed or re-sorted. Fails if a record has no histogram (or a bucket count
/// that is not a non-negative integer), emitting nothing in that case.
pub fn flatten_histograms(records: &[Value]) -> Result<Vec<HistogramRow>> {
    let mut rows = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let frames = require_u64(record, index, fields::FRAMES)?;
        let histogram = require_histogram(record, index)?;

        for (bucket, count) in histogram {
            let count = count
                .as_u64()
                .ok_or_else(|| ReportError::missing_field(index, fields::HISTOGRAM))?;
            rows.push(HistogramRow {
                frames,
                bucket: bucket.clone(),
                count,
            });
        }
    }
    Ok(rows)
}
