use clap::Args;

use super::ConnectionArgs;
use crate::analysis::{detect_redundant, format_redundancy, OutputFormat};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::mongo::MongoClient;
use crate::types::RedundancyReport;

/// Report indexes whose field list is a strict leading prefix of another
/// index in the same database
///
/// An index on `{a: 1}` next to one on `{a: 1, b: 1}` is flagged as
/// potentially redundant. Findings are a heuristic, not a proof; review
/// before dropping anything.
#[derive(Args)]
pub struct RedundantIndexesCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl RedundantIndexesCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let mongo_config = self.connection.resolve(&config);

        let client = MongoClient::connect(&mongo_config).await?;
        let databases = client
            .target_databases(self.connection.database.as_deref())
            .await?;

        let mut reports = Vec::new();
        for database in &databases {
            let indexes = client.list_index_descriptors(database).await?;
            reports.push(RedundancyReport {
                database: database.clone(),
                findings: detect_redundant(&indexes),
            });
        }

        let output = format_redundancy(&reports, OutputFormat::parse(&self.format))?;
        print!("{}", output);
        Ok(())
    }
}
