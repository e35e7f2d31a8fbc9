//! Prefix-redundancy detection over index signatures
//!
//! An index on `{a: 1, b: 1}` already serves queries on `{a: 1}`, so a
//! separate index on `{a: 1}` alone is superfluous for most query
//! patterns. Detection works over a normalised textual signature per
//! index: every pair where one signature is a strict prefix of another
//! is reported. The textual-prefix rule is a deliberate heuristic and
//! tolerates false positives from coincidental prefix collisions; it is
//! not a structural proof of redundancy.

use crate::types::{IndexDescriptor, IndexDirection, RedundancyFinding};
use std::collections::BTreeMap;
use tracing::warn;

/// Compute the canonical signature for an index: the namespace followed
/// by `field_direction` for every key in original order.
///
/// Directions that represent integers render in canonical integer text,
/// so a numeric `1` and the string `"1"` collapse to the same signature.
/// Non-integer directions (`"text"`, `"2dsphere"`, ...) render as their
/// literal text.
///
/// Returns `None` for a malformed descriptor (empty key spec or a key
/// with an empty field name); such an index contributes no signature and
/// never appears in findings.
pub fn compute_signature(index: &IndexDescriptor) -> Option<String> {
    if index.key_spec.is_empty() {
        warn!(
            "Skipping index {}[{}]: empty key specification",
            index.namespace, index.name
        );
        return None;
    }

    let mut signature = index.namespace.clone();
    for key in &index.key_spec {
        if key.field.is_empty() {
            warn!(
                "Skipping index {}[{}]: key with missing field name",
                index.namespace, index.name
            );
            return None;
        }
        signature.push_str(&format!(
            "{}_{}",
            key.field,
            canonical_direction(&key.direction)
        ));
    }
    Some(signature)
}

/// Render a direction value in its canonical textual form.
fn canonical_direction(direction: &IndexDirection) -> String {
    match direction {
        // Integral floats collapse to integer text (1.0 -> "1")
        IndexDirection::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
        IndexDirection::Number(n) => format!("{}", n),
        IndexDirection::Text(s) => match s.parse::<i64>() {
            Ok(n) => n.to_string(),
            Err(_) => s.clone(),
        },
    }
}

/// Report every pair of indexes where one signature is a strict textual
/// prefix of another.
///
/// All-pairs comparison, O(n²) in the number of indexes; operational
/// index counts per database are small. When two distinct indexes
/// normalise to an identical signature only the last one seen survives
/// in the map - an accepted limitation carried over from the original
/// behaviour. Indexes in the reserved `local` database are ignored.
pub fn detect_redundant(indexes: &[IndexDescriptor]) -> Vec<RedundancyFinding> {
    let mut index_map: BTreeMap<String, &IndexDescriptor> = BTreeMap::new();
    for index in indexes {
        if is_reserved_namespace(&index.namespace) {
            continue;
        }
        if let Some(signature) = compute_signature(index) {
            index_map.insert(signature, index);
        }
    }

    let mut findings = Vec::new();
    for (signature, shorter) in &index_map {
        for (other_signature, longer) in &index_map {
            if signature == other_signature {
                continue;
            }
            if other_signature.starts_with(signature.as_str()) {
                findings.push(RedundancyFinding {
                    shorter: (*shorter).clone(),
                    longer: (*longer).clone(),
                });
            }
        }
    }
    findings
}

/// True for namespaces in the reserved `local` database (oplog and other
/// replication internals), which are excluded from all reporting.
pub fn is_reserved_namespace(namespace: &str) -> bool {
    namespace == "local" || namespace.starts_with("local.")
}
