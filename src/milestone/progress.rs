//! Per-level milestone progress derived from backend aggregates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::MilestoneSchedule;

/// Round to two decimal places, matching the dashboard's percent output.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cumulative business per referral level for the signed-in user.
///
/// Levels with no recorded deposits read as 0. Populated from the profile
/// aggregates response, not from the team tree being displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDeposits {
    amounts: BTreeMap<u32, f64>,
}

impl LevelDeposits {
    /// Empty deposits (all levels read as 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the cumulative business for a level.
    pub fn set(&mut self, level: u32, amount: f64) {
        self.amounts.insert(level, amount);
    }

    /// Cumulative business for a level, defaulting to 0 if absent.
    pub fn get(&self, level: u32) -> f64 {
        self.amounts.get(&level).copied().unwrap_or(0.0)
    }
}

impl FromIterator<(u32, f64)> for LevelDeposits {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        Self { amounts: iter.into_iter().collect() }
    }
}

/// Progress toward one level's milestone.
///
/// `raw_percent` is the uncapped round2 percentage; achievement checks use
/// it, while the visual bar uses [`MilestoneProgress::display_percent`].
/// Keeping both explicit avoids conflating "bar is full" with "milestone
/// crossed" when the schedule is overshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneProgress {
    /// Referral level this entry describes
    pub level: u32,
    /// Cumulative business recorded for the level
    pub current_business: f64,
    /// Target from the schedule tier
    pub target_business: f64,
    /// current / target × 100, rounded to 2 decimals, uncapped
    pub raw_percent: f64,
    /// Reward unlocked when the target is crossed
    pub estimated_reward: f64,
}

impl MilestoneProgress {
    /// Percentage for the progress bar, clamped to [0, 100].
    pub fn display_percent(&self) -> f64 {
        self.raw_percent.clamp(0.0, 100.0)
    }

    /// Whether the milestone is crossed. Checked against the raw value so
    /// overshoot still counts.
    pub fn achieved(&self) -> bool {
        self.raw_percent >= 100.0
    }

    /// Business still needed to reach the target, floored at 0.
    pub fn remaining(&self) -> f64 {
        (self.target_business - self.current_business).max(0.0)
    }
}

/// Derive progress for every schedule tier, in level order.
pub fn compute_progress(
    deposits: &LevelDeposits,
    schedule: &MilestoneSchedule,
) -> Vec<MilestoneProgress> {
    schedule
        .tiers()
        .iter()
        .map(|tier| {
            let current = deposits.get(tier.level);
            MilestoneProgress {
                level: tier.level,
                current_business: current,
                target_business: tier.target_business,
                raw_percent: round2(current / tier.target_business * 100.0),
                estimated_reward: tier.reward,
            }
        })
        .collect()
}

/// Count of levels with any recorded business.
pub fn active_levels(progress: &[MilestoneProgress]) -> usize {
    progress.iter().filter(|p| p.current_business > 0.0).count()
}
