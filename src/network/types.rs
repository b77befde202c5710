//! Data types used by the edge-list pipeline.

use serde::{Deserialize, Serialize};

/// Number of players on court in one lineup.
pub const LINEUP_SIZE: usize = 5;

/// Separator used by the lineup source when it joins player names into a
/// single group label, e.g. `"A. Player - B. Player - ..."`.
pub const GROUP_SEPARATOR: &str = " - ";

/// One lineup row: the players on court, their team, and how they did.
///
/// `players` is not validated on construction; the builder rejects or skips
/// records that don't resolve to exactly [`LINEUP_SIZE`] distinct players.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupRecord {
    pub players: Vec<String>,
    pub team: String,
    pub minutes: f64,
    pub rating: f64,
}

impl LineupRecord {
    pub fn new<I, S>(players: I, team: &str, minutes: f64, rating: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LineupRecord {
            players: players.into_iter().map(Into::into).collect(),
            team: team.to_string(),
            minutes,
            rating,
        }
    }

    /// Builds a record from a group label such as `"A - B - C - D - E"`.
    pub fn from_group_name(group: &str, team: &str, minutes: f64, rating: f64) -> Self {
        Self::new(group.split(GROUP_SEPARATOR), team, minutes, rating)
    }
}

/// Aggregated connection between two players on one team.
///
/// `player_a` sorts strictly before `player_b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairEdge {
    pub player_a: String,
    pub player_b: String,
    pub team: String,
    pub minutes_together: f64,
    pub rating_avg: f64,
}

impl PairEdge {
    /// Grouping key of this edge.
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.player_a, &self.player_b, &self.team)
    }

    /// Returns `true` if `player` is one of the two endpoints.
    pub fn involves(&self, player: &str) -> bool {
        self.player_a == player || self.player_b == player
    }
}
