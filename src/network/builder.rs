use crate::network::error::{EdgeError, MalformedReason};
use crate::network::types::{LINEUP_SIZE, LineupRecord, PairEdge};
use crate::network::utility::{index_pairs, mean};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// What to do with a lineup that doesn't resolve to five distinct players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Fail the whole build on the first malformed record.
    #[default]
    Strict,
    /// Log and drop malformed records, aggregate the rest.
    Skip,
}

/// Converts lineup records into an aggregated, deduplicated pair-edge list.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListBuilder {
    strictness: Strictness,
}

/// Contributions collected for one (player_a, player_b, team) group.
#[derive(Default)]
struct PairContributions {
    minutes: f64,
    ratings: Vec<f64>,
}

impl EdgeListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Expands every lineup into its player pairs and aggregates them per team.
    ///
    /// Minutes are summed and ratings averaged without weighting by minutes.
    /// Edges come back sorted by `minutes_together` descending, ties broken by
    /// `(player_a, player_b, team)` ascending.
    ///
    /// # Errors
    ///
    /// In [`Strictness::Strict`] mode, returns [`EdgeError::MalformedRecord`]
    /// for the first lineup that doesn't have exactly five distinct players
    /// or carries invalid minutes/rating. Nothing is returned for the other
    /// records in that case.
    pub fn build(&self, lineups: &[LineupRecord]) -> Result<Vec<PairEdge>, EdgeError> {
        let mut groups: HashMap<(String, String, String), PairContributions> = HashMap::new();
        let mut skipped = 0usize;

        for (index, lineup) in lineups.iter().enumerate() {
            let players = match resolve_players(lineup) {
                Ok(players) => players,
                Err(reason) => match self.strictness {
                    Strictness::Strict => {
                        return Err(EdgeError::MalformedRecord { index, reason });
                    }
                    Strictness::Skip => {
                        warn!(index, team = %lineup.team, %reason, "Skipping malformed lineup");
                        skipped += 1;
                        continue;
                    }
                },
            };

            let team = lineup.team.trim();
            for (i, j) in index_pairs(players.len()) {
                let (a, b) = canonical_pair(players[i], players[j]);
                let group = groups
                    .entry((a.to_string(), b.to_string(), team.to_string()))
                    .or_default();
                group.minutes += lineup.minutes;
                group.ratings.push(lineup.rating);
            }
        }

        let mut edges: Vec<PairEdge> = groups
            .into_iter()
            .map(|((player_a, player_b, team), group)| PairEdge {
                player_a,
                player_b,
                team,
                minutes_together: group.minutes,
                rating_avg: mean(&group.ratings),
            })
            .collect();

        edges.sort_by(|x, y| {
            y.minutes_together
                .total_cmp(&x.minutes_together)
                .then_with(|| x.key().cmp(&y.key()))
        });

        debug!(
            lineups = lineups.len(),
            skipped,
            edges = edges.len(),
            "Edge list built"
        );

        Ok(edges)
    }
}

/// Trims the lineup's identifiers and checks the record can be paired.
fn resolve_players(lineup: &LineupRecord) -> Result<Vec<&str>, MalformedReason> {
    let players: Vec<&str> = lineup
        .players
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();

    if players.len() != LINEUP_SIZE {
        return Err(MalformedReason::PlayerCount {
            expected: LINEUP_SIZE,
            found: players.len(),
        });
    }

    let mut seen = HashSet::with_capacity(LINEUP_SIZE);
    for player in &players {
        if !seen.insert(*player) {
            return Err(MalformedReason::DuplicatePlayer(player.to_string()));
        }
    }

    if !lineup.minutes.is_finite() || lineup.minutes < 0.0 {
        return Err(MalformedReason::InvalidMinutes(lineup.minutes));
    }

    if !lineup.rating.is_finite() {
        return Err(MalformedReason::InvalidRating(lineup.rating));
    }

    Ok(players)
}

fn canonical_pair<'a>(x: &'a str, y: &'a str) -> (&'a str, &'a str) {
    if x <= y { (x, y) } else { (y, x) }
}
