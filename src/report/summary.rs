//! Summary extraction: one row of scalar stats per test run

use crate::error::Result;
use crate::models::SummaryRow;
use serde_json::Value;

/// Project each record down to its five scalar fields.
///
/// Rows come out in input order, one per record, no filtering and no
/// aggregation. The whole extraction fails on the first record missing a
/// required field, so a malformed record never yields partial output.
pub fn extract_summary(records: &[Value]) -> Result<Vec<SummaryRow>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| SummaryRow::from_record(index, record))
        .collect()
}
