//! Referir: Referral Network Display Core
//!
//! Client-side derivation layer for a referral/team dashboard. The backend
//! is the sole source of truth for all financial computation; this crate
//! turns its responses into display-ready structures:
//!
//! - **Level classification**: depth → badge color and commission percent
//! - **Milestone progress**: per-level business vs a fixed reward schedule
//! - **Team aggregation**: nested hierarchy normalization with rollup
//!   verification
//! - **Tree view**: expand/collapse state and lazy visible-row flattening
//!
//! # Example
//!
//! ```
//! use referir::milestone::{LevelDeposits, MilestoneSchedule, compute_progress};
//!
//! let schedule = MilestoneSchedule::default();
//! let mut deposits = LevelDeposits::new();
//! deposits.set(1, 500.0);
//!
//! let progress = compute_progress(&deposits, &schedule);
//! assert_eq!(progress[0].raw_percent, 50.0);
//! assert!(!progress[0].achieved());
//! ```

pub mod api;
pub mod cli;
pub mod level;
pub mod milestone;
pub mod reward;
pub mod team;
pub mod view;

// Re-exports for the common path: fetch → normalize → derive → render.
pub use api::{FetchState, RewardsResponse, TeamResponse, UserAggregates};
pub use level::{commission_percent, LevelColor};
pub use milestone::{
    compute_progress, LevelDeposits, MilestoneProgress, MilestoneSchedule, MilestoneTier,
};
pub use reward::{Reward, RewardStatus, RewardSummary};
pub use team::{NormalizeError, TeamNode, TeamTree};
pub use view::{ExpandState, TreeRow, TreeView, ViewConfig};
