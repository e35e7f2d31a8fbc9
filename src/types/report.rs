//! Report values produced by the analysis layer and consumed by the
//! console/json formatters.

use super::stats::{AggregationTotals, RedundancyFinding};
use serde::{Deserialize, Serialize};

/// One row of the index overview or top-K table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewRow {
    pub namespace: String,
    pub index_name: String,
    pub size_bytes: u64,
    /// Share of the global index total; None when the total is zero
    pub percent_of_total: Option<f64>,
}

/// Memory headroom estimate, only meaningful when the report was run on
/// the database host itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadroomReport {
    /// Physical memory minus total index size; negative when indexes
    /// already exceed physical memory (reported as-is, not clamped)
    pub headroom_bytes: f64,
    pub available_headroom_bytes: f64,
    pub used_bytes: u64,
    pub used_percent: f64,
}

/// Full size-overview report for the `index-stats` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStatsReport {
    pub totals: AggregationTotals,
    /// Sorted by namespace ascending
    pub overview: Vec<OverviewRow>,
    /// Sorted by size descending, at most K rows
    pub top_indexes: Vec<OverviewRow>,
    pub headroom: Option<HeadroomReport>,
}

/// Redundancy findings for one database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedundancyReport {
    pub database: String,
    pub findings: Vec<RedundancyFinding>,
}
