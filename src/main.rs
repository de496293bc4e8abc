//! RUDP Latency Report - Main CLI Application
//!
//! One-shot exporter that reshapes the recorded RUDP latency test runs into a
//! two-sheet Excel workbook (per-run summary stats + flattened histograms).

use clap::Parser;
use rudp_report::{app::App, cli::Cli, error::ReportError, PKG_NAME, VERSION};
use std::process;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Validate flag combinations before doing any work
    if let Err(message) = cli.validate() {
        let err = ReportError::config(message);
        eprintln!("{}", err.format_for_console(cli.use_color()));
        process::exit(err.exit_code());
    }

    // Apply color preference to all colored output
    if cli.color {
        colored::control::set_override(true);
    } else if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Debug mode enabled");
        println!();
    }

    let use_color = cli.use_color();
    if let Err(e) = App::new(cli).run() {
        eprintln!("{}", e.format_for_console(use_color));
        process::exit(e.exit_code());
    }
}
