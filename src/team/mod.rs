//! Team hierarchy: node model, normalization, and rollup verification.
//!
//! The backend returns the full referral tree in one response, already
//! nested. [`TeamTree::normalize`] turns that payload into a navigable
//! structure with the level invariant enforced (a child is one level
//! deeper than its parent, capped at 5) and duplicate ids rejected.
//! Backend rollup figures stay authoritative; [`TeamTree::verify_rollups`]
//! recomputes them locally and reports drift without mutating anything.

mod aggregate;
mod flat;
mod node;


pub use aggregate::{NormalizeError, Rollup, RollupDrift, TeamTree};
pub use flat::FlatMember;
pub use node::{NodeId, TeamNode};
