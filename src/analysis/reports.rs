//! Report building and formatting
//!
//! Builds the size-overview report value from an aggregation result and
//! renders it (and redundancy findings) as console text or JSON.

use crate::errors::AppResult;
use crate::memory::HostMemory;
use crate::types::{
    AggregationResult, IndexSizeRow, IndexStatsReport, OverviewRow, RedundancyReport,
};
use crate::utils::bytes::format_byte_size;

use super::aggregate::{estimate_headroom, percent_of_total, sort_by_namespace, top_k};

/// Output format for report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

impl OutputFormat {
    pub fn parse(format_str: &str) -> Self {
        match format_str.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        }
    }
}

/// Assemble the full size-overview report: namespace-sorted overview,
/// top-K ranking, and (when a memory snapshot is supplied, i.e. the
/// caller decided the target host is local) the headroom estimate.
///
/// Percentages are skipped entirely when the global index total is zero
/// rather than failing the report.
pub fn build_index_stats_report(
    result: &AggregationResult,
    k: usize,
    memory: Option<&HostMemory>,
) -> IndexStatsReport {
    let total = result.totals.index_size_bytes;
    let to_overview_row = |row: &IndexSizeRow| OverviewRow {
        namespace: row.namespace.clone(),
        index_name: row.index_name.clone(),
        size_bytes: row.size_bytes,
        percent_of_total: percent_of_total(row.size_bytes, total).ok(),
    };

    IndexStatsReport {
        totals: result.totals.clone(),
        overview: sort_by_namespace(&result.per_index_rows)
            .iter()
            .map(to_overview_row)
            .collect(),
        top_indexes: top_k(&result.per_index_rows, k)
            .iter()
            .map(to_overview_row)
            .collect(),
        headroom: memory.map(|m| estimate_headroom(m, total)),
    }
}

/// Format the size-overview report for console or JSON output
pub fn format_index_stats(report: &IndexStatsReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str("Index Overview\n");
            output.push_str(&render_table(&report.overview));

            output.push_str(&format!(
                "\nTop {} Largest Indexes\n",
                report.top_indexes.len()
            ));
            output.push_str(&render_table(&report.top_indexes));

            output.push('\n');
            output.push_str(&format!(
                "Total Documents: {}\n",
                report.totals.document_count
            ));
            output.push_str(&format!(
                "Total Data Size: {}\n",
                format_byte_size(report.totals.storage_size_bytes as f64)
            ));
            output.push_str(&format!(
                "Total Index Size: {}\n",
                format_byte_size(report.totals.index_size_bytes as f64)
            ));

            if let Some(headroom) = &report.headroom {
                output.push_str(&format!(
                    "RAM Headroom: {}\n",
                    format_byte_size(headroom.headroom_bytes)
                ));
                output.push_str(&format!(
                    "RAM Used: {} ({:.1}%)\n",
                    format_byte_size(headroom.used_bytes as f64),
                    headroom.used_percent
                ));
                output.push_str(&format!(
                    "Available RAM Headroom: {}\n",
                    format_byte_size(headroom.available_headroom_bytes)
                ));
            }

            Ok(output)
        }
        OutputFormat::Json => export_json(report),
    }
}

/// Format redundancy findings for console or JSON output
pub fn format_redundancy(reports: &[RedundancyReport], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            for report in reports {
                output.push_str(&format!("Checking DB: {}\n", report.database));
                for finding in &report.findings {
                    output.push_str(&format!(
                        "Index {}[{}] may be redundant with {}[{}]\n",
                        finding.shorter.namespace,
                        finding.shorter.name,
                        finding.longer.namespace,
                        finding.longer.name
                    ));
                }
            }
            Ok(output)
        }
        OutputFormat::Json => export_json(&reports),
    }
}

/// Render overview rows as a fixed-column table:
/// Collection | Index | % Size | Index Size
fn render_table(rows: &[OverviewRow]) -> String {
    let collection_width = column_width("Collection", rows.iter().map(|r| r.namespace.len()));
    let index_width = column_width("Index", rows.iter().map(|r| r.index_name.len()));

    let mut output = format!(
        "{:<cw$}  {:<iw$}  {:>7}  {:>10}\n",
        "Collection",
        "Index",
        "% Size",
        "Index Size",
        cw = collection_width,
        iw = index_width,
    );
    output.push_str(&format!(
        "{:-<cw$}  {:-<iw$}  {:->7}  {:->10}\n",
        "",
        "",
        "",
        "",
        cw = collection_width,
        iw = index_width,
    ));

    for row in rows {
        let percent = match row.percent_of_total {
            Some(p) => format!("{:.1}%", p),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<cw$}  {:<iw$}  {:>7}  {:>10}\n",
            row.namespace,
            row.index_name,
            percent,
            format_byte_size(row.size_bytes as f64),
            cw = collection_width,
            iw = index_width,
        ));
    }

    output
}

fn column_width(header: &str, content_lengths: impl Iterator<Item = usize>) -> usize {
    content_lengths.chain(std::iter::once(header.len())).max().unwrap_or(0)
}

fn export_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
