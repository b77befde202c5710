//! CLI entry point for the lineup network tool.
//!
//! Provides subcommands for turning a lineup table into a player-pair edge
//! list and for summarizing the resulting network.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lineup_network::{
    network::{EdgeListBuilder, PairEdge, Strictness},
    output::{print_json, print_pretty, write_edges},
    parser::{ParseOptions, read_lineups},
    stats::NetworkStats,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "lineup_network")]
#[command(about = "Build player-pair networks from lineup statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a lineup CSV into an aggregated player-pair edge list
    Build {
        /// Lineup CSV file (optionally .gz)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Directory to write the edge list to
        #[arg(short = 'd', long, default_value = "data")]
        output_dir: PathBuf,

        /// File name of the edge list inside the output directory
        #[arg(short = 'n', long, default_value = "1_lineup_network_edges.csv")]
        output_name: String,

        /// Drop lineups that played fewer minutes together
        #[arg(short, long, default_value_t = 0.0)]
        min_minutes: f64,

        /// Skip malformed lineups instead of aborting
        #[arg(long, default_value_t = false)]
        skip_malformed: bool,

        /// Gzip compress the edge list
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
    /// Summarize the pair network built from a lineup CSV
    Stats {
        /// Lineup CSV file (optionally .gz)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Drop lineups that played fewer minutes together
        #[arg(short, long, default_value_t = 0.0)]
        min_minutes: f64,

        /// Skip malformed lineups instead of aborting
        #[arg(long, default_value_t = false)]
        skip_malformed: bool,

        /// Number of most-connected players to report
        #[arg(short, long, default_value_t = 10)]
        top: usize,

        /// Print the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output_dir,
            output_name,
            min_minutes,
            skip_malformed,
            gzip,
        } => {
            let edges = load_edges(&input, min_minutes, skip_malformed)?;
            let path = write_edges(&output_dir, &output_name, &edges, gzip)?;

            info!(path = %path.display(), edges = edges.len(), "Saved network edge list");
        }
        Commands::Stats {
            input,
            min_minutes,
            skip_malformed,
            top,
            json,
        } => {
            let edges = load_edges(&input, min_minutes, skip_malformed)?;
            let stats = NetworkStats::from_edges(&edges).with_top(top);

            info!(
                players = stats.players,
                edges = stats.edges,
                teams = stats.teams,
                total_minutes = stats.total_minutes,
                density = stats.density(),
                "Network summary"
            );

            if json {
                print_json(&stats)?;
            } else {
                print_pretty(&stats);
                for (rank, player) in stats.centrality.iter().enumerate() {
                    info!(
                        rank = rank + 1,
                        player = %player.player,
                        degree = player.degree,
                        weighted_degree = player.weighted_degree,
                        avg_rating = player.avg_rating,
                        "Key player"
                    );
                }
            }
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the program.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/lineup_network.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("lineup_network.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}

/// Reads the lineup table and aggregates it into pair edges.
#[tracing::instrument(skip(input), fields(path = %input.display()))]
fn load_edges(input: &Path, min_minutes: f64, skip_malformed: bool) -> Result<Vec<PairEdge>> {
    let lineups = read_lineups(input, &ParseOptions { min_minutes })?;
    info!(lineups = lineups.len(), min_minutes, "Lineups loaded");

    let strictness = if skip_malformed {
        Strictness::Skip
    } else {
        Strictness::Strict
    };

    let edges = EdgeListBuilder::new().strictness(strictness).build(&lineups)?;
    info!(edges = edges.len(), "Created unique player-pair connections");

    Ok(edges)
}
