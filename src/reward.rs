//! Milestone reward records and summary tiles.
//!
//! Rewards are created server-side when a level's business crosses its
//! milestone, require admin approval, and repeat each time the milestone
//! is reached again. The client only summarizes and displays them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::LevelColor;

/// Lifecycle of a milestone reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardStatus {
    /// Achieved, awaiting admin approval
    Pending,
    /// Approved, claimable by the user
    Approved,
    /// Paid out
    Claimed,
}

impl RewardStatus {
    /// Only approved rewards expose a claim action.
    pub fn is_claimable(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl std::fmt::Display for RewardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Claimed => write!(f, "claimed"),
        }
    }
}

/// One earned milestone reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(alias = "_id")]
    pub id: String,
    /// Referral level whose business crossed the milestone
    pub level: u32,
    /// Business threshold that was crossed
    pub milestone: f64,
    /// Reward amount in USDT
    pub amount: f64,
    pub status: RewardStatus,
    pub achieved_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_date: Option<DateTime<Utc>>,
}

impl Reward {
    /// Badge color for the reward's level.
    pub fn level_color(&self) -> LevelColor {
        LevelColor::for_level(self.level)
    }
}

/// Tile figures for the rewards page header.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RewardSummary {
    /// Sum of all reward amounts
    pub total: f64,
    /// Sum of claimed reward amounts
    pub claimed: f64,
    /// Sum of not-yet-claimed amounts (pending and approved)
    pub pending: f64,
    /// Number of rewards, i.e. milestones achieved
    pub milestones_achieved: usize,
}

impl RewardSummary {
    /// Summarize a reward history.
    pub fn from_rewards(rewards: &[Reward]) -> Self {
        let mut summary = Self { milestones_achieved: rewards.len(), ..Self::default() };
        for reward in rewards {
            summary.total += reward.amount;
            if reward.status == RewardStatus::Claimed {
                summary.claimed += reward.amount;
            } else {
                summary.pending += reward.amount;
            }
        }
        summary
    }
}
