//! Milestone schedule: validated tier table, YAML-loadable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::level::MAX_LEVEL;

/// Schedule validation and loading errors.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Schedule must have exactly {expected} tiers, got {actual}")]
    WrongArity { expected: usize, actual: usize },

    #[error("Tier for level {level} has non-positive target {target}")]
    NonPositiveTarget { level: u32, target: f64 },

    #[error("Tier for level {level} has negative reward {reward}")]
    NegativeReward { level: u32, reward: f64 },

    #[error("Tiers must cover levels 1..=5 in order, found level {found} at position {position}")]
    OutOfOrder { found: u32, position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// One milestone tier: the business target for a level and its reward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneTier {
    /// Referral level this tier applies to (1–5)
    pub level: u32,
    /// Cumulative business required to unlock the reward
    pub target_business: f64,
    /// Flat reward amount paid on crossing the target
    pub reward: f64,
}

/// Ordered five-tier milestone schedule.
///
/// Validated at construction so downstream arithmetic never divides by
/// zero: every target is positive and the tiers cover levels 1..=5 in
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MilestoneTier>", into = "Vec<MilestoneTier>")]
pub struct MilestoneSchedule {
    tiers: Vec<MilestoneTier>,
}

impl MilestoneSchedule {
    /// Build a schedule from tiers, validating arity, ordering, and bounds.
    pub fn new(tiers: Vec<MilestoneTier>) -> Result<Self> {
        let expected = MAX_LEVEL as usize;
        if tiers.len() != expected {
            return Err(ScheduleError::WrongArity { expected, actual: tiers.len() });
        }
        for (position, tier) in tiers.iter().enumerate() {
            if tier.level != position as u32 + 1 {
                return Err(ScheduleError::OutOfOrder { found: tier.level, position });
            }
            if tier.target_business <= 0.0 {
                return Err(ScheduleError::NonPositiveTarget {
                    level: tier.level,
                    target: tier.target_business,
                });
            }
            if tier.reward < 0.0 {
                return Err(ScheduleError::NegativeReward {
                    level: tier.level,
                    reward: tier.reward,
                });
            }
        }
        Ok(Self { tiers })
    }

    /// Load a schedule from a YAML file (a sequence of tiers).
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parse a schedule from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let tiers: Vec<MilestoneTier> = serde_yaml::from_str(text)?;
        Self::new(tiers)
    }

    /// Tiers in level order.
    pub fn tiers(&self) -> &[MilestoneTier] {
        &self.tiers
    }

    /// Look up the tier for a level, if mapped.
    pub fn for_level(&self, level: u32) -> Option<&MilestoneTier> {
        self.tiers.iter().find(|t| t.level == level)
    }
}

impl TryFrom<Vec<MilestoneTier>> for MilestoneSchedule {
    type Error = ScheduleError;

    fn try_from(tiers: Vec<MilestoneTier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<MilestoneSchedule> for Vec<MilestoneTier> {
    fn from(schedule: MilestoneSchedule) -> Self {
        schedule.tiers
    }
}

impl Default for MilestoneSchedule {
    /// The production table: $1k/$10 at level 1, then $10k–$40k
    /// for $20 each at levels 2–5.
    fn default() -> Self {
        Self {
            tiers: vec![
                MilestoneTier { level: 1, target_business: 1_000.0, reward: 10.0 },
                MilestoneTier { level: 2, target_business: 10_000.0, reward: 20.0 },
                MilestoneTier { level: 3, target_business: 20_000.0, reward: 20.0 },
                MilestoneTier { level: 4, target_business: 30_000.0, reward: 20.0 },
                MilestoneTier { level: 5, target_business: 40_000.0, reward: 20.0 },
            ],
        }
    }
}
