//! Workbook writer for the two report sheets

use crate::error::{ReportError, Result};
use crate::models::{HistogramRow, SummaryRow};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};

/// Name of the per-run scalar stats sheet
pub const SUMMARY_SHEET: &str = "Summary";
/// Name of the flattened bucket sheet
pub const HISTOGRAMS_SHEET: &str = "Histograms";

/// Writes the generated tables into a single two-sheet xlsx workbook
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting the given output path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Target path of the workbook
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the workbook in memory and save it in a single call.
    ///
    /// Each sheet gets a bold header row and one data row per table row,
    /// numbers as plain f64 cells and bucket labels as strings. An unwritable
    /// target (missing parent directory, permissions, full disk) surfaces as a
    /// write error, and since nothing touches the filesystem before `save`,
    /// failure leaves no partial file behind.
    pub fn write(&self, summary: &[SummaryRow], histograms: &[HistogramRow]) -> Result<PathBuf> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;
        write_header(sheet, &SummaryRow::COLUMNS, &header)?;
        for (i, row) in summary.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_number(r, 0, row.frames as f64)?;
            sheet.write_number(r, 1, row.samples as f64)?;
            sheet.write_number(r, 2, row.min_rtt_ms)?;
            sheet.write_number(r, 3, row.max_rtt_ms)?;
            sheet.write_number(r, 4, row.avg_rtt_ms)?;
        }

        let sheet = workbook.add_worksheet();
        sheet.set_name(HISTOGRAMS_SHEET)?;
        write_header(sheet, &HistogramRow::COLUMNS, &header)?;
        for (i, row) in histograms.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_number(r, 0, row.frames as f64)?;
            sheet.write_string(r, 1, &row.bucket)?;
            sheet.write_number(r, 2, row.count as f64)?;
        }

        workbook
            .save(&self.path)
            .map_err(|e| ReportError::write_error(format!("{}: {}", self.path.display(), e)))?;

        Ok(self.path.clone())
    }
}

fn write_header(sheet: &mut Worksheet, columns: &[&str], format: &Format) -> Result<()> {
    for (col, name) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, format)?;
    }
    Ok(())
}
