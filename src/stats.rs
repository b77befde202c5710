use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::network::PairEdge;
use crate::network::utility::mean;

/// Per-player connectivity in the pair network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerCentrality {
    pub player: String,
    /// Number of distinct teammates the player shares an edge with.
    pub degree: usize,
    /// Total minutes across the player's edges.
    pub weighted_degree: f64,
    pub avg_rating: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct NetworkStats {
    pub generated_at: DateTime<Utc>,
    pub players: usize,
    pub edges: usize,
    pub teams: usize,
    pub total_minutes: f64,
    pub centrality: Vec<PlayerCentrality>,
}

#[derive(Default)]
struct PlayerAccumulator<'a> {
    partners: BTreeSet<&'a str>,
    minutes: f64,
    ratings: Vec<f64>,
}

impl NetworkStats {
    pub fn from_edges(edges: &[PairEdge]) -> Self {
        let mut by_player: BTreeMap<&str, PlayerAccumulator> = BTreeMap::new();
        let mut teams = BTreeSet::new();
        let mut total_minutes = 0.0;

        for edge in edges {
            teams.insert(edge.team.as_str());
            total_minutes += edge.minutes_together;

            for (player, partner) in [
                (&edge.player_a, &edge.player_b),
                (&edge.player_b, &edge.player_a),
            ] {
                let acc = by_player.entry(player.as_str()).or_default();
                acc.partners.insert(partner.as_str());
                acc.minutes += edge.minutes_together;
                acc.ratings.push(edge.rating_avg);
            }
        }

        let mut centrality: Vec<PlayerCentrality> = by_player
            .into_iter()
            .map(|(player, acc)| PlayerCentrality {
                player: player.to_string(),
                degree: acc.partners.len(),
                weighted_degree: acc.minutes,
                avg_rating: mean(&acc.ratings),
            })
            .collect();

        centrality.sort_by(|x, y| {
            y.weighted_degree
                .total_cmp(&x.weighted_degree)
                .then_with(|| x.player.cmp(&y.player))
        });

        NetworkStats {
            generated_at: Utc::now(),
            players: centrality.len(),
            edges: edges.len(),
            teams: teams.len(),
            total_minutes,
            centrality,
        }
    }

    /// Keeps only the `n` most connected players.
    pub fn with_top(mut self, n: usize) -> Self {
        self.centrality.truncate(n);
        self
    }

    /// Edge density of the player graph, `2E / (N(N-1))`.
    ///
    /// An edge that exists on more than one team counts once per team.
    pub fn density(&self) -> f64 {
        if self.players < 2 {
            return 0.0;
        }
        let n = self.players as f64;
        2.0 * self.edges as f64 / (n * (n - 1.0))
    }
}
