//! Flat-to-tree conversion, an explicit variant of normalization.
//!
//! The consumed API returns an already-nested hierarchy, so the main path
//! is [`TeamTree::normalize`]. Some backends ship the same data flat, one
//! record per member with a referrer id; this module is the documented
//! extension point for that shape rather than a hidden assumption.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NodeId, NormalizeError, TeamNode, TeamTree};

/// One member record in a flat hierarchy payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatMember {
    pub id: NodeId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub investment: f64,
    #[serde(default)]
    pub team_size: u64,
    #[serde(default)]
    pub direct_business: f64,
    #[serde(default)]
    pub total_business: f64,
    #[serde(default)]
    pub team_earnings: f64,
    #[serde(rename = "createdAt")]
    pub joined_at: DateTime<Utc>,
    /// Absent for root-level members (direct referrals of the viewer)
    #[serde(default)]
    pub referrer_id: Option<NodeId>,
}

impl FlatMember {
    fn into_node(self) -> TeamNode {
        TeamNode {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            investment: self.investment,
            team_size: self.team_size,
            direct_business: self.direct_business,
            total_business: self.total_business,
            team_earnings: self.team_earnings,
            level: 0, // assigned during normalization
            joined_at: self.joined_at,
            children: Vec::new(),
            referrer_id: self.referrer_id,
        }
    }
}

impl TeamTree {
    /// Build a normalized tree from flat member records.
    ///
    /// Members without a referrer become roots; children keep input order
    /// under their parent. A referrer id that matches no member is an
    /// error, as is a referrer cycle (those members are reachable from no
    /// root).
    pub fn from_flat(members: Vec<FlatMember>) -> Result<Self, NormalizeError> {
        let mut nodes: HashMap<NodeId, TeamNode> = HashMap::with_capacity(members.len());
        let mut children_of: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        let mut root_ids: Vec<NodeId> = Vec::new();

        for member in &members {
            let id = member.id.clone();
            if nodes.insert(id.clone(), member.clone().into_node()).is_some() {
                return Err(NormalizeError::DuplicateNode(id));
            }
        }

        for member in &members {
            match &member.referrer_id {
                Some(referrer) => {
                    if !nodes.contains_key(referrer) {
                        return Err(NormalizeError::UnknownReferrer {
                            id: member.id.clone(),
                            referrer: referrer.clone(),
                        });
                    }
                    children_of.entry(referrer.clone()).or_default().push(member.id.clone());
                }
                None => root_ids.push(member.id.clone()),
            }
        }

        let mut roots = Vec::with_capacity(root_ids.len());
        for id in &root_ids {
            if let Some(root) = attach_children(id, &mut nodes, &children_of) {
                roots.push(root);
            }
        }

        // Anything still unattached sits behind a referrer cycle.
        if let Some(id) = nodes.keys().min().cloned() {
            return Err(NormalizeError::CyclicReference(id));
        }

        Self::normalize(roots)
    }
}

fn attach_children(
    id: &NodeId,
    nodes: &mut HashMap<NodeId, TeamNode>,
    children_of: &HashMap<NodeId, Vec<NodeId>>,
) -> Option<TeamNode> {
    let mut node = nodes.remove(id)?;
    if let Some(child_ids) = children_of.get(id) {
        for child_id in child_ids {
            if let Some(child) = attach_children(child_id, nodes, children_of) {
                node.children.push(child);
            }
        }
    }
    Some(node)
}
