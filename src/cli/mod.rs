use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// MongoDB index size reporting and redundant index detection
#[derive(Parser)]
#[command(name = "mongo-index-audit")]
#[command(about = "MongoDB index size reporting and redundant index detection")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Report collection and index sizes across databases
    IndexStats(commands::index_stats::IndexStatsCommand),
    /// Report indexes made redundant by more specific indexes
    RedundantIndexes(commands::redundant_indexes::RedundantIndexesCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::IndexStats(command) => command.run().await,
        Commands::RedundantIndexes(command) => command.run().await,
    }
}
