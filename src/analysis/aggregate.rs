//! Statistics aggregation and ranking
//!
//! Pure, single-pass transformations over already-fetched collection
//! statistics: global totals, the flattened per-index size table, top-K
//! ranking, percentage-of-total, and the memory headroom estimate.

use crate::errors::{AppError, AppResult};
use crate::memory::HostMemory;
use crate::types::{AggregationResult, CollectionStat, HeadroomReport, IndexSizeRow};
use std::cmp::Reverse;

use super::redundancy::is_reserved_namespace;

/// Combine raw per-collection statistics into global totals and a
/// flattened per-index size table.
///
/// Sums document counts, storage sizes, and the server-reported total
/// index size (missing totals treated as 0); one row is appended per
/// `(collection, index)` pair. The per-row sum may diverge from the
/// global total when a collection's reported total disagrees with its
/// per-index map; the divergence is accepted rather than reconciled.
/// Namespaces in the reserved `local` database are excluded.
pub fn aggregate(stats: &[CollectionStat]) -> AggregationResult {
    let mut result = AggregationResult::default();

    for stat in stats {
        if is_reserved_namespace(&stat.namespace) {
            continue;
        }

        result.totals.document_count += stat.document_count;
        result.totals.storage_size_bytes += stat.storage_size_bytes;
        result.totals.index_size_bytes += stat.total_index_size_bytes.unwrap_or(0);

        for (index_name, size_bytes) in &stat.index_sizes_bytes {
            result.per_index_rows.push(IndexSizeRow {
                namespace: stat.namespace.clone(),
                index_name: index_name.clone(),
                size_bytes: *size_bytes,
            });
        }
    }

    result
}

/// Percentage of `size_bytes` against the global index total.
///
/// Fails with `AppError::DivisionByZero` when the total is zero; callers
/// skip percentage rendering in that case instead of failing the report.
pub fn percent_of_total(size_bytes: u64, total_index_bytes: u64) -> AppResult<f64> {
    if total_index_bytes == 0 {
        return Err(AppError::DivisionByZero);
    }
    Ok((size_bytes as f64 / total_index_bytes as f64) * 100.0)
}

/// The k largest rows by size, descending.
///
/// Ties break by original order (stable sort, first seen wins). Returns
/// all rows when fewer than k exist.
pub fn top_k(rows: &[IndexSizeRow], k: usize) -> Vec<IndexSizeRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by_key(|row| Reverse(row.size_bytes));
    ranked.truncate(k);
    ranked
}

/// Rows sorted by namespace ascending for the full overview listing.
///
/// Stable, so rows within one collection keep their original order.
pub fn sort_by_namespace(rows: &[IndexSizeRow]) -> Vec<IndexSizeRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| a.namespace.cmp(&b.namespace));
    sorted
}

/// Estimate cache headroom from a host memory snapshot.
///
/// `headroom = physical total - total index size`; a negative value
/// signals that indexes already exceed physical memory and is reported
/// as-is. Only meaningful when the snapshot was taken on the database
/// host itself; callers gate on that precondition.
pub fn estimate_headroom(memory: &HostMemory, total_index_size_bytes: u64) -> HeadroomReport {
    let headroom_bytes = memory.total_bytes as f64 - total_index_size_bytes as f64;
    HeadroomReport {
        headroom_bytes,
        available_headroom_bytes: (100.0 - memory.used_percent) / 100.0 * headroom_bytes,
        used_bytes: memory.used_bytes,
        used_percent: memory.used_percent,
    }
}
