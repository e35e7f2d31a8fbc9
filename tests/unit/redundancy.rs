//! Redundancy detector tests: prefix property, direction normalisation,
//! and the limits of the textual heuristic

use mongo_index_audit::analysis::{compute_signature, detect_redundant};
use mongo_index_audit::types::{IndexDescriptor, IndexDirection, IndexKey};

fn index(namespace: &str, name: &str, keys: &[(&str, IndexDirection)]) -> IndexDescriptor {
    IndexDescriptor {
        namespace: namespace.to_string(),
        name: name.to_string(),
        key_spec: keys
            .iter()
            .map(|(field, direction)| IndexKey::new(*field, direction.clone()))
            .collect(),
    }
}

fn asc() -> IndexDirection {
    IndexDirection::Number(1.0)
}

#[test]
fn shorter_prefix_reported_against_longer_never_reverse() {
    let a = index("shop.users", "x", &[("x", asc())]);
    let b = index("shop.users", "x_y", &[("x", asc()), ("y", asc())]);

    let findings = detect_redundant(&[a.clone(), b.clone()]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].shorter.name, "x");
    assert_eq!(findings[0].longer.name, "x_y");
}

#[test]
fn differing_field_order_produces_no_finding() {
    let a = index("shop.users", "x_y", &[("x", asc()), ("y", asc())]);
    let c = index("shop.users", "y_x", &[("y", asc()), ("x", asc())]);

    assert!(detect_redundant(&[a, c]).is_empty());
}

#[test]
fn numeric_and_string_one_produce_identical_signatures() {
    let numeric = index("shop.users", "n", &[("x", IndexDirection::Number(1.0))]);
    let text = index(
        "shop.users",
        "t",
        &[("x", IndexDirection::Text("1".to_string()))],
    );

    assert_eq!(compute_signature(&numeric), compute_signature(&text));
}

#[test]
fn indexes_in_different_namespaces_never_match() {
    let a = index("shop.users", "x", &[("x", asc())]);
    let b = index("shop.orders", "x_y", &[("x", asc()), ("y", asc())]);

    assert!(detect_redundant(&[a, b]).is_empty());
}

#[test]
fn local_database_indexes_produce_no_findings() {
    let a = index("local.oplog.rs", "ts", &[("ts", asc())]);
    let b = index("local.oplog.rs", "ts_h", &[("ts", asc()), ("h", asc())]);

    assert!(detect_redundant(&[a, b]).is_empty());
}

#[test]
fn textual_heuristic_matches_on_rendered_text_not_structure() {
    // "ab" + dir 1 renders identically to a prefix of "ab1" + ... only
    // when the concatenated text lines up; the heuristic deliberately
    // compares rendered strings, so coincidental prefix collisions are
    // reported as findings
    let short = index("db.c", "short", &[("a", IndexDirection::Text("1".to_string()))]);
    let long = index(
        "db.c",
        "long",
        &[("a", IndexDirection::Text("1b".to_string()))],
    );

    // signatures: "db.ca_1" and "db.ca_1b" - textual prefix, structurally unrelated
    let findings = detect_redundant(&[short, long]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].shorter.name, "short");
}

#[test]
fn multi_key_chains_report_every_prefix_pair() {
    let one = index("shop.users", "a", &[("a", asc())]);
    let two = index("shop.users", "ab", &[("a", asc()), ("b", asc())]);
    let three = index(
        "shop.users",
        "abc",
        &[("a", asc()), ("b", asc()), ("c", asc())],
    );

    // (a, ab), (a, abc), (ab, abc)
    let findings = detect_redundant(&[one, two, three]);
    assert_eq!(findings.len(), 3);
    assert!(findings
        .iter()
        .all(|f| f.longer.key_spec.len() > f.shorter.key_spec.len()));
}
