//! CSV parser for lineup tables.
//!
//! Accepts both layouts the lineup collector writes: five explicit
//! `Player_1`..`Player_5` columns, or a single `Lineup_Players` column with
//! names joined by `" - "`.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::network::LineupRecord;

/// Row filters applied while reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Lineups with fewer minutes than this are dropped.
    pub min_minutes: f64,
}

#[derive(Debug, Deserialize)]
struct LineupRow {
    #[serde(rename = "Lineup_Players", alias = "lineup_players", default)]
    lineup_players: Option<String>,
    #[serde(rename = "Player_1", alias = "player_1", default)]
    player_1: Option<String>,
    #[serde(rename = "Player_2", alias = "player_2", default)]
    player_2: Option<String>,
    #[serde(rename = "Player_3", alias = "player_3", default)]
    player_3: Option<String>,
    #[serde(rename = "Player_4", alias = "player_4", default)]
    player_4: Option<String>,
    #[serde(rename = "Player_5", alias = "player_5", default)]
    player_5: Option<String>,
    #[serde(rename = "Team", alias = "team")]
    team: String,
    #[serde(rename = "Minutes", alias = "minutes")]
    minutes: f64,
    #[serde(rename = "Net_Rating", alias = "net_rating", default)]
    net_rating: Option<f64>,
    #[serde(rename = "Plus_Minus", alias = "plus_minus", default)]
    plus_minus: Option<f64>,
}

impl LineupRow {
    fn into_record(self) -> LineupRecord {
        let rating = self.net_rating.or(self.plus_minus).unwrap_or(0.0);

        let columns = [
            self.player_1,
            self.player_2,
            self.player_3,
            self.player_4,
            self.player_5,
        ];

        if columns.iter().any(Option::is_some) {
            let players = columns.into_iter().flatten();
            return LineupRecord::new(players, &self.team, self.minutes, rating);
        }

        let group = self.lineup_players.unwrap_or_default();
        LineupRecord::from_group_name(&group, &self.team, self.minutes, rating)
    }
}

/// Decodes lineup records from CSV data with a header row.
///
/// Player counts are not checked here; short or oversized lineups are
/// passed through for the edge builder to reject or skip.
///
/// # Errors
///
/// Returns an error if a row is missing the team or minutes column, or a
/// numeric field doesn't parse.
pub fn parse_lineups<R: Read>(reader: R, options: &ParseOptions) -> Result<Vec<LineupRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    let mut filtered = 0usize;

    for (line, result) in rdr.deserialize().enumerate() {
        let row: LineupRow = result.with_context(|| format!("Invalid lineup row {}", line + 1))?;

        if row.minutes < options.min_minutes {
            filtered += 1;
            continue;
        }

        records.push(row.into_record());
    }

    debug!(
        records = records.len(),
        filtered,
        min_minutes = options.min_minutes,
        "Lineup rows parsed"
    );

    Ok(records)
}

/// Reads lineup records from a CSV file, gunzipping it first if the path
/// ends in `.gz`.
pub fn read_lineups(path: &Path, options: &ParseOptions) -> Result<Vec<LineupRecord>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let records = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        parse_lineups(GzDecoder::new(reader), options)
    } else {
        parse_lineups(reader, options)
    };

    records.with_context(|| format!("Failed to read lineups from {}", path.display()))
}
