//! Milestones command implementation

use crate::api::UserAggregates;
use crate::cli::logging::log;
use crate::cli::{LogLevel, MilestonesArgs};
use crate::milestone::{active_levels, compute_progress, MilestoneProgress, MilestoneSchedule};

const BAR_WIDTH: usize = 20;

/// Render milestone progress from a profile aggregates export
pub fn run_milestones(args: &MilestonesArgs, level: LogLevel) -> Result<(), String> {
    let schedule = match &args.schedule {
        Some(path) => MilestoneSchedule::from_yaml_file(path)
            .map_err(|e| format!("Failed to load schedule: {e}"))?,
        None => MilestoneSchedule::default(),
    };

    let text = std::fs::read_to_string(&args.aggregates)
        .map_err(|e| format!("Failed to read {}: {e}", args.aggregates.display()))?;
    let aggregates: UserAggregates =
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse aggregates: {e}"))?;

    let progress = compute_progress(&aggregates.level_deposits(), &schedule);

    log(level, LogLevel::Normal, "Milestone progress by level:");
    for entry in &progress {
        log(level, LogLevel::Normal, &render_progress(entry));
        if level == LogLevel::Verbose {
            log(
                level,
                LogLevel::Verbose,
                &format!("    raw {:.2}%, reward ${:.2}", entry.raw_percent, entry.estimated_reward),
            );
        }
    }
    log(
        level,
        LogLevel::Normal,
        &format!("Active levels: {}/{}", active_levels(&progress), progress.len()),
    );

    Ok(())
}

fn render_progress(entry: &MilestoneProgress) -> String {
    let filled = (entry.display_percent() / 100.0 * BAR_WIDTH as f64).round() as usize;
    let bar: String =
        "#".repeat(filled.min(BAR_WIDTH)) + &"-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH));
    let status = if entry.achieved() {
        "achieved".to_string()
    } else {
        format!("${:.2} remaining", entry.remaining())
    };
    format!(
        "  L{} [{}] {:>6.2}%  ${:.2} / ${:.2} ({status})",
        entry.level,
        bar,
        entry.display_percent(),
        entry.current_business,
        entry.target_business,
    )
}
