use clap::Args;

use super::ConnectionArgs;
use crate::analysis::{aggregate, build_index_stats_report, format_index_stats, OutputFormat};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::memory;
use crate::mongo::MongoClient;

/// Report collection and index sizes across databases
///
/// Prints an index overview sorted by collection namespace, the top-K
/// largest indexes, and global totals. When run on the database host
/// itself, memory headroom lines are appended.
#[derive(Args)]
pub struct IndexStatsCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// How many of the largest indexes to rank
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl IndexStatsCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let mongo_config = self.connection.resolve(&config);

        let client = MongoClient::connect(&mongo_config).await?;
        let databases = client
            .target_databases(self.connection.database.as_deref())
            .await?;
        let stats = client.gather_stats(&databases).await?;

        let result = aggregate(&stats);

        // Headroom against local physical memory is only meaningful when
        // this process runs on the database host
        let host_memory = if memory::is_local_host(&mongo_config.host) {
            Some(memory::inspect())
        } else {
            None
        };

        let report = build_index_stats_report(&result, self.top, host_memory.as_ref());
        let output = format_index_stats(&report, OutputFormat::parse(&self.format))?;
        print!("{}", output);
        Ok(())
    }
}
