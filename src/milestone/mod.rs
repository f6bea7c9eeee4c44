//! Milestone schedule and per-level progress derivation.
//!
//! A milestone schedule is a fixed, non-user-specific table of five tiers,
//! one per referral level: a business target and a flat reward unlocked
//! when the signed-in user's cumulative deposits for that level cross it.
//! Progress is recomputed from backend aggregates on every fetch and never
//! stored.

mod progress;
mod schedule;

#[cfg(test)]
mod tests;

pub use progress::{active_levels, compute_progress, LevelDeposits, MilestoneProgress};
pub use schedule::{MilestoneSchedule, MilestoneTier, ScheduleError};
