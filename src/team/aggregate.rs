//! Hierarchy normalization and local rollup verification.

use std::collections::HashSet;

use thiserror::Error;

use crate::level::MAX_LEVEL;

use super::{NodeId, TeamNode};

/// Normalization failures.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Node '{0}' appears more than once in the hierarchy")]
    DuplicateNode(NodeId),

    #[error("Node '{id}' references unknown referrer '{referrer}'")]
    UnknownReferrer { id: NodeId, referrer: NodeId },

    #[error("Node '{0}' is part of a referrer cycle and unreachable from any root")]
    CyclicReference(NodeId),
}

/// Locally recomputed rollup figures for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rollup {
    /// 1 + count of all descendants
    pub team_size: u64,
    /// Sum of immediate children's investment
    pub direct_business: f64,
    /// Sum of all descendants' investment
    pub total_business: f64,
}

/// A mismatch between backend-reported and locally recomputed rollups.
#[derive(Debug, Clone, PartialEq)]
pub struct RollupDrift {
    pub id: NodeId,
    pub reported: Rollup,
    pub recomputed: Rollup,
}

/// Normalized team hierarchy: root nodes with children nested, levels
/// enforced, ids unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamTree {
    roots: Vec<TeamNode>,
}

impl TeamTree {
    /// Normalize a backend-supplied nested hierarchy.
    ///
    /// Rejects duplicate ids and rewrites levels so roots sit at level 1
    /// and each child is one deeper than its parent, capped at
    /// [`MAX_LEVEL`]. Insertion order is preserved throughout.
    pub fn normalize(mut roots: Vec<TeamNode>) -> Result<Self, NormalizeError> {
        let mut seen = HashSet::new();
        for root in &mut roots {
            assign_levels(root, 1, &mut seen)?;
        }
        Ok(Self { roots })
    }

    /// Root nodes in backend order.
    pub fn roots(&self) -> &[TeamNode] {
        &self.roots
    }

    /// Ids of the root-level nodes, in order.
    pub fn root_ids(&self) -> Vec<NodeId> {
        self.roots.iter().map(|n| n.id.clone()).collect()
    }

    /// Depth-first iterator over every node in the tree.
    pub fn iter(&self) -> impl Iterator<Item = &TeamNode> {
        let mut stack: Vec<&TeamNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Find a node by id.
    pub fn node(&self, id: &str) -> Option<&TeamNode> {
        self.iter().find(|n| n.id == id)
    }

    /// Total node count.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the hierarchy has no members at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Recompute rollups for one node from its subtree.
    pub fn recompute_rollups(node: &TeamNode) -> Rollup {
        let mut team_size = 1;
        let mut total_business = 0.0;
        let mut direct_business = 0.0;
        for child in &node.children {
            let child_rollup = Self::recompute_rollups(child);
            team_size += child_rollup.team_size;
            total_business += child.investment + child_rollup.total_business;
            direct_business += child.investment;
        }
        Rollup { team_size, direct_business, total_business }
    }

    /// Compare backend-reported rollups against local recomputation.
    ///
    /// The backend stays authoritative; this is a drift check for the
    /// display layer, so reported fields are never overwritten.
    pub fn verify_rollups(&self) -> Vec<RollupDrift> {
        let mut drift = Vec::new();
        for node in self.iter() {
            let recomputed = Self::recompute_rollups(node);
            let reported = Rollup {
                team_size: node.team_size,
                direct_business: node.direct_business,
                total_business: node.total_business,
            };
            if !rollups_match(&reported, &recomputed) {
                drift.push(RollupDrift { id: node.id.clone(), reported, recomputed });
            }
        }
        drift
    }
}

fn rollups_match(reported: &Rollup, recomputed: &Rollup) -> bool {
    const EPS: f64 = 1e-6;
    reported.team_size == recomputed.team_size
        && (reported.direct_business - recomputed.direct_business).abs() < EPS
        && (reported.total_business - recomputed.total_business).abs() < EPS
}

fn assign_levels(
    node: &mut TeamNode,
    level: u32,
    seen: &mut HashSet<NodeId>,
) -> Result<(), NormalizeError> {
    if !seen.insert(node.id.clone()) {
        return Err(NormalizeError::DuplicateNode(node.id.clone()));
    }
    node.level = level.min(MAX_LEVEL);
    for child in &mut node.children {
        assign_levels(child, level + 1, seen)?;
    }
    Ok(())
}
