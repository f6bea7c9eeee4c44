//! CLI command implementations

mod inspect;
mod milestones;
mod validate;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::cli::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Inspect(args) => inspect::run_inspect(&args, log_level),
        Command::Milestones(args) => milestones::run_milestones(&args, log_level),
        Command::Validate(args) => validate::run_validate(&args, log_level),
    }
}
