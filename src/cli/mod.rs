//! Command-line interface for the report exporter

use clap::Parser;
use std::path::PathBuf;

/// RUDP Latency Report - exports recorded RTT test runs as a two-sheet Excel workbook
#[derive(Parser, Debug, Clone)]
#[command(name = "rudp-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output path for the generated workbook
    #[arg(short, long, default_value = crate::defaults::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output (prints a run overview before writing)
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output (step-by-step pipeline logging)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.output.as_os_str().is_empty() {
            return Err("Output path must not be empty".to_string());
        }

        Ok(())
    }

    /// Whether console output should be colored
    pub fn use_color(&self) -> bool {
        !self.no_color
    }
}
