//! CLI module for referir
//!
//! Command handlers and argument definitions for the `referir` binary.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Referir: referral network inspection tool
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "referir")]
#[command(version)]
#[command(about = "Inspect referral team hierarchies and milestone progress")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Inspect a team hierarchy JSON export
    Inspect(InspectArgs),

    /// Show milestone progress from profile aggregates
    Milestones(MilestonesArgs),

    /// Validate a milestone schedule file
    Validate(ValidateArgs),
}

/// Arguments for the inspect command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InspectArgs {
    /// Path to a team hierarchy JSON file (full response or bare member array)
    #[arg(value_name = "TEAM_JSON")]
    pub team: PathBuf,

    /// Expand top-level nodes instead of starting collapsed
    #[arg(short, long)]
    pub expand: bool,

    /// Check backend rollup figures against local recomputation
    #[arg(long)]
    pub check_rollups: bool,
}

/// Arguments for the milestones command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct MilestonesArgs {
    /// Path to a profile aggregates JSON file
    #[arg(value_name = "AGGREGATES_JSON")]
    pub aggregates: PathBuf,

    /// Milestone schedule YAML (defaults to the production table)
    #[arg(short, long)]
    pub schedule: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to a milestone schedule YAML file
    #[arg(value_name = "SCHEDULE")]
    pub schedule: PathBuf,
}
