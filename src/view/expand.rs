//! Expand-set: which node ids currently show their children.

use std::collections::HashSet;

use crate::team::NodeId;

/// Set of expanded node ids.
///
/// Each id is independently collapsed or expanded; toggling one id never
/// touches ancestors or descendants. Not persisted across remounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: HashSet<NodeId>,
}

impl ExpandState {
    /// Empty state: everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// State pre-seeded with the given ids expanded.
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        Self { expanded: ids.into_iter().map(Into::into).collect() }
    }

    /// Whether a node currently shows its children.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip one id's membership. Toggling twice restores the original
    /// state.
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Replace the set with the given ids. The dashboard passes root-level
    /// ids here, so "Expand All" opens top-level nodes without walking
    /// deep branches open.
    pub fn expand_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        self.expanded = ids.into_iter().map(Into::into).collect();
    }

    /// Collapse everything.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Number of expanded ids.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
