//! Report builder and formatter tests

use mongo_index_audit::analysis::{
    aggregate, build_index_stats_report, format_index_stats, format_redundancy, OutputFormat,
};
use mongo_index_audit::memory::HostMemory;
use mongo_index_audit::types::{
    CollectionStat, IndexDescriptor, IndexKey, IndexDirection, RedundancyFinding,
    RedundancyReport,
};
use std::collections::BTreeMap;

fn sample_stats() -> Vec<CollectionStat> {
    vec![
        CollectionStat {
            namespace: "shop.users".to_string(),
            document_count: 100,
            storage_size_bytes: 4096,
            index_sizes_bytes: BTreeMap::from([
                ("_id_".to_string(), 2048u64),
                ("email_1".to_string(), 1024u64),
            ]),
            total_index_size_bytes: Some(3072),
        },
        CollectionStat {
            namespace: "shop.orders".to_string(),
            document_count: 50,
            storage_size_bytes: 2048,
            index_sizes_bytes: BTreeMap::from([("_id_".to_string(), 1024u64)]),
            total_index_size_bytes: Some(1024),
        },
    ]
}

#[test]
fn console_report_has_overview_topk_and_summary() {
    let result = aggregate(&sample_stats());
    let report = build_index_stats_report(&result, 2, None);
    let console = format_index_stats(&report, OutputFormat::Console).unwrap();

    assert!(console.contains("Index Overview"));
    assert!(console.contains("Top 2 Largest Indexes"));
    assert!(console.contains("Total Documents: 150"));
    assert!(console.contains("Total Data Size: 6.00K"));
    assert!(console.contains("Total Index Size: 4.00K"));

    // Overview is namespace-sorted: orders before users
    let orders_pos = console.find("shop.orders").unwrap();
    let users_pos = console.find("shop.users").unwrap();
    assert!(orders_pos < users_pos);
}

#[test]
fn top_k_table_is_capped_at_k() {
    let result = aggregate(&sample_stats());
    let report = build_index_stats_report(&result, 2, None);
    assert_eq!(report.top_indexes.len(), 2);
    assert_eq!(report.top_indexes[0].size_bytes, 2048);
    assert_eq!(report.top_indexes[1].size_bytes, 1024);
}

#[test]
fn headroom_lines_render_only_with_a_memory_snapshot() {
    let result = aggregate(&sample_stats());
    let memory = HostMemory {
        total_bytes: 8_589_934_592,
        used_bytes: 4_294_967_296,
        used_percent: 50.0,
    };

    let with_memory = build_index_stats_report(&result, 5, Some(&memory));
    let console = format_index_stats(&with_memory, OutputFormat::Console).unwrap();
    assert!(console.contains("RAM Headroom:"));
    assert!(console.contains("RAM Used: 4.00G (50.0%)"));
    assert!(console.contains("Available RAM Headroom:"));

    let without_memory = build_index_stats_report(&result, 5, None);
    let console = format_index_stats(&without_memory, OutputFormat::Console).unwrap();
    assert!(!console.contains("RAM"));
}

#[test]
fn negative_headroom_is_reported_as_is() {
    // Indexes larger than physical memory: headroom goes negative and
    // is rendered with its sign, not clamped
    let stats = vec![CollectionStat {
        namespace: "big.data".to_string(),
        document_count: 1,
        storage_size_bytes: 0,
        index_sizes_bytes: BTreeMap::from([("_id_".to_string(), 2_097_152u64)]),
        total_index_size_bytes: Some(2_097_152),
    }];
    let memory = HostMemory {
        total_bytes: 1_048_576,
        used_bytes: 524_288,
        used_percent: 50.0,
    };

    let report = build_index_stats_report(&aggregate(&stats), 5, Some(&memory));
    let headroom = report.headroom.as_ref().expect("memory snapshot supplied");
    assert_eq!(headroom.headroom_bytes, -1_048_576.0);

    let console = format_index_stats(&report, OutputFormat::Console).unwrap();
    assert!(console.contains("RAM Headroom: -1.00M"));
}

#[test]
fn redundancy_console_output_uses_original_wording() {
    let shorter = IndexDescriptor {
        namespace: "shop.users".to_string(),
        name: "x_1".to_string(),
        key_spec: vec![IndexKey::new("x", IndexDirection::Number(1.0))],
    };
    let longer = IndexDescriptor {
        namespace: "shop.users".to_string(),
        name: "x_1_y_1".to_string(),
        key_spec: vec![
            IndexKey::new("x", IndexDirection::Number(1.0)),
            IndexKey::new("y", IndexDirection::Number(1.0)),
        ],
    };
    let reports = vec![RedundancyReport {
        database: "shop".to_string(),
        findings: vec![RedundancyFinding { shorter, longer }],
    }];

    let console = format_redundancy(&reports, OutputFormat::Console).unwrap();
    assert!(console.contains("Checking DB: shop"));
    assert!(console
        .contains("Index shop.users[x_1] may be redundant with shop.users[x_1_y_1]"));
}

#[test]
fn json_format_serialises_the_report_values() {
    let result = aggregate(&sample_stats());
    let report = build_index_stats_report(&result, 5, None);
    let json = format_index_stats(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["totals"]["document_count"], 150);
    assert!(value["headroom"].is_null());

    let reports: Vec<RedundancyReport> = Vec::new();
    let json = format_redundancy(&reports, OutputFormat::Json).unwrap();
    assert_eq!(json.trim(), "[]");
}
