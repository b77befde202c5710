//! Lineup-to-network conversion.
//!
//! Expands each 5-player lineup into its 10 player pairs, groups the pairs
//! by team, and aggregates minutes and rating into one [`PairEdge`] per
//! pair. The resulting edge list feeds player-interaction network analysis.

pub mod builder;
pub mod error;
pub mod types;
pub mod utility;

pub use builder::{EdgeListBuilder, Strictness};
pub use error::{EdgeError, MalformedReason};
pub use types::{LINEUP_SIZE, LineupRecord, PairEdge};
