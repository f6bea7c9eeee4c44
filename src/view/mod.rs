//! Expand/collapse view state and visible-row flattening.
//!
//! View state lives outside the data nodes: the tree stays read-only per
//! render pass while [`ExpandState`] and the selection are the only
//! mutable pieces, confined to one view's lifetime. Collapsed subtrees
//! are never walked for rendering but remain resident, since the whole
//! hierarchy arrives in one response.

mod expand;
mod tree_view;


pub use expand::ExpandState;
pub use tree_view::{TreeRow, TreeView, ViewConfig};
