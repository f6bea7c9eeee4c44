//! Typed response envelopes for the consumed REST surface.
//!
//! The backend is an opaque, authoritative collaborator; these types pin
//! down the shapes this crate actually reads, wire spellings included.
//! HTTP transport itself is out of scope. [`FetchState`] models the fetch
//! lifecycle so "still loading", "failed", and "loaded but empty" stay
//! distinguishable.

mod state;
mod wire;


pub use state::FetchState;
pub use wire::{RewardsResponse, TeamPayload, TeamResponse, TeamTiles, UserAggregates};
