//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::milestone::MilestoneSchedule;

/// Validate a milestone schedule YAML file
pub fn run_validate(args: &ValidateArgs, level: LogLevel) -> Result<(), String> {
    let schedule = MilestoneSchedule::from_yaml_file(&args.schedule)
        .map_err(|e| format!("Invalid schedule: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Schedule OK: {} tiers", schedule.tiers().len()),
    );
    for tier in schedule.tiers() {
        log(
            level,
            LogLevel::Verbose,
            &format!(
                "  L{}: target ${:.2}, reward ${:.2}",
                tier.level, tier.target_business, tier.reward
            ),
        );
    }

    Ok(())
}
