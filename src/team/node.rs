//! Team member node as returned by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::{commission_percent, LevelColor};

/// Identifier for a team node, unique within one hierarchy.
pub type NodeId = String;

/// One referred user in the hierarchy.
///
/// Constructed fresh on every data fetch and immutable for the duration
/// of one render pass. Numeric rollups (`team_size`, `direct_business`,
/// `total_business`) come from the backend; the display layer verifies
/// them but does not overwrite them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamNode {
    pub id: NodeId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Own deposit amount, >= 0
    #[serde(default)]
    pub investment: f64,
    /// 1 + count of all descendants
    #[serde(default)]
    pub team_size: u64,
    /// Sum of immediate children's investment
    #[serde(default)]
    pub direct_business: f64,
    /// Sum of all descendants' investment
    #[serde(default)]
    pub total_business: f64,
    #[serde(default)]
    pub team_earnings: f64,
    /// Depth from the viewing user, 1 = direct referral, capped at 5
    #[serde(default)]
    pub level: u32,
    #[serde(rename = "createdAt")]
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub children: Vec<TeamNode>,
    /// Informational backlink to the referrer, not ownership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_id: Option<NodeId>,
}

impl TeamNode {
    /// Badge color for this node's level.
    pub fn level_color(&self) -> LevelColor {
        LevelColor::for_level(self.level)
    }

    /// Commission percent earned on this node's level.
    pub fn commission_percent(&self) -> f64 {
        commission_percent(self.level)
    }

    /// Whether this node has any children to expand.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
