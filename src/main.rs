//! Referir CLI
//!
//! Inspection entry point for the referir library.
//!
//! # Usage
//!
//! ```bash
//! # Render a team hierarchy export
//! referir inspect team.json --expand --check-rollups
//!
//! # Show milestone progress from profile aggregates
//! referir milestones aggregates.json --schedule schedule.yaml
//!
//! # Validate a schedule file
//! referir validate schedule.yaml
//! ```

use clap::Parser;
use referir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
