//! Tree view model: selection, expansion, and lazy row flattening.

use serde::{Deserialize, Serialize};

use crate::level::LevelColor;
use crate::team::{NodeId, TeamNode, TeamTree};

use super::ExpandState;

/// Renderer configuration.
///
/// Which nodes start open is an explicit, testable input rather than a
/// hardcoded seed set, defaulting to none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Node ids expanded at mount
    #[serde(default)]
    pub default_expanded: Vec<NodeId>,
}

/// One visible row of the flattened tree, carrying everything the row
/// template needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRow {
    pub id: NodeId,
    pub name: String,
    pub email: String,
    pub level: u32,
    pub badge: LevelColor,
    pub commission_percent: f64,
    pub investment: f64,
    pub team_size: u64,
    /// Nesting depth from the root row, 0-based; drives indentation
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
}

/// View model over a normalized team tree.
///
/// Owns the tree plus the two pieces of UI state the page keeps: the
/// expand-set and the currently selected member. Selection and expansion
/// are independent; clicking a row selects it, the chevron toggles it.
#[derive(Debug, Clone)]
pub struct TreeView {
    tree: TeamTree,
    expand: ExpandState,
    selected: Option<NodeId>,
}

impl TreeView {
    /// Mount a view over a tree with default (everything collapsed)
    /// configuration.
    pub fn new(tree: TeamTree) -> Self {
        Self::with_config(tree, &ViewConfig::default())
    }

    /// Mount a view with the configured ids pre-expanded.
    pub fn with_config(tree: TeamTree, config: &ViewConfig) -> Self {
        Self {
            tree,
            expand: ExpandState::with_expanded(config.default_expanded.iter().cloned()),
            selected: None,
        }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &TeamTree {
        &self.tree
    }

    /// Current expand-set.
    pub fn expand_state(&self) -> &ExpandState {
        &self.expand
    }

    /// Flip one node's expansion.
    pub fn toggle(&mut self, id: &str) {
        self.expand.toggle(id);
    }

    /// Expand the top-level nodes (and only those).
    pub fn expand_all(&mut self) {
        let roots = self.tree.root_ids();
        self.expand.expand_all(roots);
    }

    /// Collapse every node.
    pub fn collapse_all(&mut self) {
        self.expand.collapse_all();
    }

    /// Select a member for the detail panel, or clear the selection.
    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    /// The selected member's node, if any.
    pub fn selected(&self) -> Option<&TeamNode> {
        self.selected.as_deref().and_then(|id| self.tree.node(id))
    }

    /// Flatten the tree into the rows currently visible.
    ///
    /// Recurses into a node's children only while that node is expanded;
    /// collapsed subtrees are skipped entirely.
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for root in self.tree.roots() {
            self.push_rows(root, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, node: &TeamNode, depth: usize, rows: &mut Vec<TreeRow>) {
        let expanded = self.expand.is_expanded(&node.id);
        rows.push(TreeRow {
            id: node.id.clone(),
            name: node.name.clone(),
            email: node.email.clone(),
            level: node.level,
            badge: node.level_color(),
            commission_percent: node.commission_percent(),
            investment: node.investment,
            team_size: node.team_size,
            depth,
            has_children: node.has_children(),
            expanded,
            selected: self.selected.as_deref() == Some(node.id.as_str()),
        });
        if expanded {
            for child in &node.children {
                self.push_rows(child, depth + 1, rows);
            }
        }
    }
}
