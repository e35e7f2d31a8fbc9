//! Analysis engines: statistics aggregation/ranking and prefix-redundancy
//! detection, plus the report builders and formatters on top of them.

pub mod aggregate;
pub mod redundancy;
pub mod reports;

pub use aggregate::{aggregate, estimate_headroom, percent_of_total, sort_by_namespace, top_k};
pub use redundancy::{compute_signature, detect_redundant, is_reserved_namespace};
pub use reports::{build_index_stats_report, format_index_stats, format_redundancy, OutputFormat};
