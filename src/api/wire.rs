//! Wire shapes for the team, profile, and rewards endpoints.

use serde::{Deserialize, Serialize};

use crate::milestone::LevelDeposits;
use crate::reward::Reward;
use crate::team::TeamNode;

/// `GET` team hierarchy response: `{ data: { team, userData } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub data: TeamPayload,
}

/// Payload of the team endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPayload {
    /// Root-level members with children nested
    #[serde(default)]
    pub team: Vec<TeamNode>,
    #[serde(rename = "userData", default)]
    pub user_data: TeamTiles,
}

/// Header tiles on the team page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTiles {
    #[serde(default)]
    pub total_team_investments: f64,
    /// Total team size across all levels
    #[serde(default)]
    pub my_network: u64,
    #[serde(default)]
    pub team_earnings: f64,
}

/// Per-level deposit aggregates from the profile endpoint.
///
/// The wire spells the fields `depositeInLabel1..5`; that spelling is
/// preserved here and nowhere else.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserAggregates {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "depositeInLabel1", default)]
    pub deposit_level_1: f64,
    #[serde(rename = "depositeInLabel2", default)]
    pub deposit_level_2: f64,
    #[serde(rename = "depositeInLabel3", default)]
    pub deposit_level_3: f64,
    #[serde(rename = "depositeInLabel4", default)]
    pub deposit_level_4: f64,
    #[serde(rename = "depositeInLabel5", default)]
    pub deposit_level_5: f64,
}

impl UserAggregates {
    /// Convert the fixed wire fields into per-level deposits.
    pub fn level_deposits(&self) -> LevelDeposits {
        LevelDeposits::from_iter([
            (1, self.deposit_level_1),
            (2, self.deposit_level_2),
            (3, self.deposit_level_3),
            (4, self.deposit_level_4),
            (5, self.deposit_level_5),
        ])
    }
}

/// `GET` rewards response: `{ rewards }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardsResponse {
    #[serde(default)]
    pub rewards: Vec<Reward>,
}
