//! Output formatting and persistence for edge lists and network summaries.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::network::PairEdge;
use crate::stats::NetworkStats;

/// Column order of the edge CSV, matching the field order of [`PairEdge`].
pub const EDGE_HEADER: [&str; 5] = [
    "player_a",
    "player_b",
    "team",
    "minutes_together",
    "rating_avg",
];

/// Logs network statistics using Rust's debug pretty-print format.
pub fn print_pretty(stats: &NetworkStats) {
    debug!("{:#?}", stats);
}

/// Logs network statistics as pretty-printed JSON.
pub fn print_json(stats: &NetworkStats) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

/// Serializes edges as CSV with a single header row into any writer.
pub fn write_edges_to<W: Write>(writer: W, edges: &[PairEdge]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    // serialize() only emits the header alongside the first row
    if edges.is_empty() {
        writer.write_record(EDGE_HEADER)?;
    }

    for edge in edges {
        writer.serialize(edge)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the edge list to `dir/file_name`, creating `dir` if needed.
///
/// With `gzip` set, the file is compressed and `.gz` is appended to its name.
/// An existing file at the target path is replaced. Returns the written path.
pub fn write_edges(dir: &Path, file_name: &str, edges: &[PairEdge], gzip: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = if gzip {
        dir.join(format!("{file_name}.gz"))
    } else {
        dir.join(file_name)
    };

    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    if gzip {
        let mut encoder = GzEncoder::new(file, Compression::default());
        write_edges_to(&mut encoder, edges)?;
        encoder.finish()?;
    } else {
        write_edges_to(file, edges)?;
    }

    debug!(path = %path.display(), edges = edges.len(), gzip, "Edge list written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::EdgeListBuilder;
    use flate2::read::GzDecoder;
    use std::env;
    use std::io::Read;

    fn temp_dir(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn sample_edges() -> Vec<PairEdge> {
        vec![
            PairEdge {
                player_a: "A".into(),
                player_b: "B".into(),
                team: "X".into(),
                minutes_together: 30.0,
                rating_avg: 1.0,
            },
            PairEdge {
                player_a: "A".into(),
                player_b: "C".into(),
                team: "X".into(),
                minutes_together: 10.0,
                rating_avg: 5.0,
            },
        ]
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let stats = NetworkStats::from_edges(&sample_edges());
        print_pretty(&stats);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let stats = NetworkStats::from_edges(&sample_edges());
        print_json(&stats).unwrap();
    }

    #[test]
    fn test_write_edges_to_header_and_rows() {
        let mut buf = Vec::new();
        write_edges_to(&mut buf, &sample_edges()).unwrap();

        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "player_a,player_b,team,minutes_together,rating_avg");
        assert_eq!(lines[1], "A,B,X,30.0,1.0");
    }

    #[test]
    fn test_write_edges_to_empty_list_keeps_header() {
        let mut buf = Vec::new();
        write_edges_to(&mut buf, &[]).unwrap();

        let content = String::from_utf8(buf).unwrap();
        assert_eq!(content, "player_a,player_b,team,minutes_together,rating_avg\n");
    }

    #[test]
    fn test_write_edges_empty_build_has_header_only() {
        let dir = temp_dir("lineup_network_test_empty");
        let _ = fs::remove_dir_all(&dir);

        let edges = EdgeListBuilder::new().build(&[]).unwrap();
        let path = write_edges(&dir, "edges.csv", &edges, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("player_a,player_b,team"));
        assert_eq!(content.lines().count(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_edges_creates_dir_and_file() {
        let dir = temp_dir("lineup_network_test_plain");
        let _ = fs::remove_dir_all(&dir); // clean up any prior run

        let path = write_edges(&dir, "edges.csv", &sample_edges(), false).unwrap();

        assert_eq!(path, dir.join("edges.csv"));
        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.contains("player_a")).count();
        assert_eq!(header_count, 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_edges_overwrites_previous_run() {
        let dir = temp_dir("lineup_network_test_overwrite");
        let _ = fs::remove_dir_all(&dir);

        write_edges(&dir, "edges.csv", &sample_edges(), false).unwrap();
        let path = write_edges(&dir, "edges.csv", &sample_edges()[..1], false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_edges_gzip() {
        let dir = temp_dir("lineup_network_test_gzip");
        let _ = fs::remove_dir_all(&dir);

        let path = write_edges(&dir, "edges.csv", &sample_edges(), true).unwrap();
        assert_eq!(path, dir.join("edges.csv.gz"));

        let mut content = String::new();
        GzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.starts_with("player_a,player_b,team"));
        assert_eq!(content.lines().count(), 3);

        fs::remove_dir_all(&dir).unwrap();
    }
}
