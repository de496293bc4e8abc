//! End-to-end tests for the report exporter CLI
//!
//! These drive the compiled binary into temporary directories and read the
//! written workbooks back with calamine to validate sheet layout, round-trip
//! fidelity and idempotence.

use anyhow::Result;
use assert_cmd::prelude::*;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("rudp-report").unwrap()
}

/// Read one sheet of a written workbook back as a cell range
fn read_sheet(path: &Path, sheet: &str) -> Result<Range<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    Ok(workbook.worksheet_range(sheet)?)
}

fn cell_f64(range: &Range<Data>, row: u32, col: u32) -> f64 {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => *f,
        Some(Data::Int(i)) => *i as f64,
        other => panic!("expected numeric cell at ({row}, {col}), got {other:?}"),
    }
}

fn cell_str(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected string cell at ({row}, {col}), got {other:?}"),
    }
}

fn header_of(range: &Range<Data>) -> Vec<String> {
    (0..range.width() as u32).map(|col| cell_str(range, 0, col)).collect()
}

/// Materialize a sheet as plain rows of cells for content comparison
fn snapshot(range: &Range<Data>) -> Vec<Vec<Data>> {
    range.rows().map(|row| row.to_vec()).collect()
}

/// Test that a successful run prints the output path and creates the file
#[test]
fn test_success_prints_output_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rudp_results.xlsx");

    create_test_cmd()
        .arg("--no-color")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(path.to_str().unwrap()));

    assert!(path.exists());
}

/// Test that the workbook contains exactly the two sheets, in order
#[test]
fn test_workbook_has_two_named_sheets_in_order() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("report.xlsx");

    create_test_cmd().arg("-o").arg(&path).assert().success();

    let workbook: Xlsx<_> = open_workbook(&path)?;
    assert_eq!(workbook.sheet_names(), ["Summary", "Histograms"]);
    Ok(())
}

/// Test round-trip of the Summary sheet: header plus the exact scalar fields
#[test]
fn test_summary_sheet_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("report.xlsx");

    create_test_cmd().arg("-o").arg(&path).assert().success();

    let range = read_sheet(&path, "Summary")?;
    assert_eq!(
        header_of(&range),
        [
            "Frames",
            "Samples",
            "Min RTT (ms)",
            "Max RTT (ms)",
            "Average RTT (ms)"
        ]
    );

    // one data row per embedded run
    assert_eq!(range.height(), 5);

    // first run reproduced exactly
    assert_eq!(cell_f64(&range, 1, 0), 10_000.0);
    assert_eq!(cell_f64(&range, 1, 1), 10_000.0);
    assert_eq!(cell_f64(&range, 1, 2), 0.108);
    assert_eq!(cell_f64(&range, 1, 3), 2.816);
    assert_eq!(cell_f64(&range, 1, 4), 0.154);

    // runs stay in input order
    let frames: Vec<f64> = (1..5).map(|row| cell_f64(&range, row, 0)).collect();
    assert_eq!(frames, [10_000.0, 100_000.0, 1_000_000.0, 10_000_000.0]);
    Ok(())
}

/// Test the Histograms sheet layout and per-run bucket rows
#[test]
fn test_histograms_sheet_rows() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("report.xlsx");

    create_test_cmd().arg("-o").arg(&path).assert().success();

    let range = read_sheet(&path, "Histograms")?;
    assert_eq!(header_of(&range), ["Frames", "Bucket (ms)", "Count"]);

    // header + 2 + 3 + 5 + 13 bucket rows
    assert_eq!(range.height(), 24);

    // smallest run: exactly its two buckets, in log order
    assert_eq!(cell_f64(&range, 1, 0), 10_000.0);
    assert_eq!(cell_str(&range, 1, 1), "0-1 ms");
    assert_eq!(cell_f64(&range, 1, 2), 9_999.0);
    assert_eq!(cell_str(&range, 2, 1), "2-3 ms");
    assert_eq!(cell_f64(&range, 2, 2), 1.0);

    // largest run: its bucket counts sum back to the frame count
    let largest_total: f64 = (1..range.height() as u32)
        .filter(|&row| cell_f64(&range, row, 0) == 10_000_000.0)
        .map(|row| cell_f64(&range, row, 2))
        .sum();
    assert_eq!(largest_total, 10_000_000.0);
    Ok(())
}

/// Test that two runs with identical input produce equivalent tabular content
#[test]
fn test_rerun_is_idempotent() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("report.xlsx");

    create_test_cmd().arg("-o").arg(&path).assert().success();
    let summary_first = snapshot(&read_sheet(&path, "Summary")?);
    let histograms_first = snapshot(&read_sheet(&path, "Histograms")?);

    create_test_cmd().arg("-o").arg(&path).assert().success();
    let summary_second = snapshot(&read_sheet(&path, "Summary")?);
    let histograms_second = snapshot(&read_sheet(&path, "Histograms")?);

    assert_eq!(summary_first, summary_second);
    assert_eq!(histograms_first, histograms_second);
    Ok(())
}

/// Test that an unwritable output path fails with the write exit code
#[test]
fn test_unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("report.xlsx");

    create_test_cmd()
        .arg("--no-color")
        .arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Write error"));

    assert!(!path.exists());
}

/// Test verbose mode prints the run overview before writing
#[test]
fn test_verbose_run_overview() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.xlsx");

    create_test_cmd()
        .arg("--no-color")
        .arg("--verbose")
        .arg("-o")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Test runs:"))
        .stdout(predicate::str::contains("10000000 frames"));
}

/// Test conflicting color flags are rejected as a usage error
#[test]
fn test_conflicting_color_flags() {
    create_test_cmd()
        .arg("--color")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
