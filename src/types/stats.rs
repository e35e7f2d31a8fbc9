//! Raw statistics and index metadata as fetched from the server, plus
//! the aggregation results derived from them.
//!
//! All values are constructed fresh per reporting run and discarded once
//! the report has been rendered; there is no cross-run identity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `collStats` result, reduced to the fields the report needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionStat {
    /// Fully-qualified `database.collection` namespace
    pub namespace: String,
    pub document_count: u64,
    pub storage_size_bytes: u64,
    /// Per-index sizes; empty if the collection has no indexes
    pub index_sizes_bytes: BTreeMap<String, u64>,
    /// Server-reported total; may diverge from the sum of
    /// `index_sizes_bytes` and is trusted as-is for the global figure
    pub total_index_size_bytes: Option<u64>,
}

/// Direction of a single index key as reported by the server.
///
/// Index directions arrive from BSON either numerically (`1`, `-1`,
/// `1.0`) or as text (`"1"`, `"text"`, `"2dsphere"`); signature
/// normalisation must treat numeric and numeric-string forms as equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexDirection {
    Number(f64),
    Text(String),
}

/// One key of an index specification; key order is semantically
/// significant (it defines prefix matching).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexKey {
    pub field: String,
    pub direction: IndexDirection,
}

impl IndexKey {
    pub fn new(field: impl Into<String>, direction: IndexDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// One index definition within a namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    pub namespace: String,
    /// Unique within the namespace
    pub name: String,
    pub key_spec: Vec<IndexKey>,
}

/// Sums across all processed collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationTotals {
    pub document_count: u64,
    pub storage_size_bytes: u64,
    pub index_size_bytes: u64,
}

/// One `(collection, index)` row of the flattened size table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSizeRow {
    pub namespace: String,
    pub index_name: String,
    pub size_bytes: u64,
}

/// Result of one aggregation pass.
///
/// `per_index_rows` sums need not equal `totals.index_size_bytes`: the
/// server-reported collection total is trusted for the global figure and
/// the per-index map for the rows. The divergence is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregationResult {
    pub totals: AggregationTotals,
    pub per_index_rows: Vec<IndexSizeRow>,
}

/// A pair of indexes where the shorter one's signature is a strict
/// textual prefix of the longer one's, making the shorter likely
/// superfluous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedundancyFinding {
    pub shorter: IndexDescriptor,
    pub longer: IndexDescriptor,
}
