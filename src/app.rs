//! Main application orchestration and execution

use crate::{
    cli::Cli,
    dataset,
    error::Result,
    logging::Logger,
    models::SummaryRow,
    report::{extract_summary, flatten_histograms, ReportWriter},
};
use colored::Colorize;
use std::path::PathBuf;

/// Main application struct that coordinates the export pipeline
pub struct App {
    cli: Cli,
    logger: Logger,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Self {
        let logger = Logger::from_flags(cli.verbose, cli.debug, cli.use_color());
        Self { cli, logger }
    }

    /// Run the Load → Extract Summary → Flatten Histograms → Write pipeline
    ///
    /// Returns the path of the written workbook. Any failure aborts the run
    /// before the output file is created.
    pub fn run(&self) -> Result<PathBuf> {
        self.logger.debug("loading embedded measurement records");
        let records = dataset::embedded_runs();
        self.logger
            .info(&format!("loaded {} measurement records", records.len()));

        self.logger.debug("extracting summary rows");
        let summary = extract_summary(&records)?;
        self.logger
            .debug(&format!("summary table: {} rows", summary.len()));

        if self.cli.verbose {
            self.print_run_overview(&summary);
        }

        self.logger.debug("flattening histogram buckets");
        let histograms = flatten_histograms(&records)?;
        self.logger
            .debug(&format!("histogram table: {} rows", histograms.len()));

        let writer = ReportWriter::new(&self.cli.output);
        self.logger
            .debug(&format!("writing workbook to {}", writer.path().display()));
        let path = writer.write(&summary, &histograms)?;

        let message = format!("Report written to {}", path.display());
        if self.cli.use_color() {
            println!("{}", message.green());
        } else {
            println!("{}", message);
        }

        Ok(path)
    }

    /// Print a console overview of the runs about to be exported
    fn print_run_overview(&self, summary: &[SummaryRow]) {
        println!("Test runs:");
        for row in summary {
            println!(
                "  {:>10} frames  {:>10} samples  min {:.3} ms  avg {:.3} ms  max {:.3} ms",
                row.frames, row.samples, row.min_rtt_ms, row.avg_rtt_ms, row.max_rtt_ms
            );
        }
        println!();
    }
}
