//! Core data model: raw per-collection statistics, index descriptors,
//! and the derived report values.

pub mod report;
pub mod stats;

pub use report::{HeadroomReport, IndexStatsReport, OverviewRow, RedundancyReport};
pub use stats::{
    AggregationResult, AggregationTotals, CollectionStat, IndexDescriptor, IndexDirection,
    IndexKey, IndexSizeRow, RedundancyFinding,
};
