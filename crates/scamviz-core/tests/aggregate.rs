// File: crates/scamviz-core/tests/aggregate.rs
// Purpose: Validate grouping, ordering, exclusion, and truncation rules.

use scamviz_core::{aggregate, yearly_totals, ScamRecord, TOP_GROUPS};

fn rec(year: i32, level2: &str, level3: &str, amount: f64, reports: u64) -> ScamRecord {
    ScamRecord {
        year,
        category_level2: level2.to_string(),
        category_level3: level3.to_string(),
        amount,
        report_count: reports,
    }
}

#[test]
fn excludes_the_catch_all_bucket() {
    let records = vec![
        rec(2024, "Investment", "Crypto", 100.0, 5),
        rec(2024, "Other", "Misc", 9999.0, 50),
        rec(2024, "Phishing", "Email", 50.0, 3),
    ];
    let groups = aggregate(&records, TOP_GROUPS);
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["Investment", "Phishing"]);
}

#[test]
fn sorts_descending_by_reports_and_truncates() {
    let records: Vec<ScamRecord> = (0..7)
        .map(|i| rec(2024, &format!("Cat{i}"), "Sub", 10.0, i as u64))
        .collect();
    let groups = aggregate(&records, 5);
    assert_eq!(groups.len(), 5);
    for pair in groups.windows(2) {
        assert!(pair[0].total_reports >= pair[1].total_reports);
    }
    // Cat6 has the most reports, Cat2 the fewest that survives the cut.
    assert_eq!(groups[0].key, "Cat6");
    assert_eq!(groups[4].key, "Cat2");
}

#[test]
fn equal_report_counts_keep_first_seen_order() {
    let records = vec![
        rec(2024, "Romance", "Dating", 10.0, 4),
        rec(2024, "Identity", "Documents", 20.0, 4),
        rec(2024, "Phishing", "Email", 30.0, 9),
    ];
    let groups = aggregate(&records, TOP_GROUPS);
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["Phishing", "Romance", "Identity"]);
}

#[test]
fn group_totals_equal_children_sums() {
    let records = vec![
        rec(2023, "Investment", "Crypto", 120.0, 4),
        rec(2024, "Investment", "Crypto", 80.0, 2),
        rec(2024, "Investment", "Ponzi", 300.0, 1),
        rec(2024, "Investment", "Shares", 55.5, 6),
    ];
    let groups = aggregate(&records, TOP_GROUPS);
    assert_eq!(groups.len(), 1);
    let group = &groups[0];

    assert_eq!(group.children.len(), 3);
    let child_amount: f64 = group.children.iter().map(|c| c.amount).sum();
    let child_reports: u64 = group.children.iter().map(|c| c.reports).sum();
    assert_eq!(group.total_amount, child_amount);
    assert_eq!(group.total_reports, child_reports);

    // Children keep first-seen order with merged sums.
    assert_eq!(group.children[0].key, "Crypto");
    assert_eq!(group.children[0].amount, 200.0);
    assert_eq!(group.children[0].reports, 6);
}

#[test]
fn never_returns_more_than_max_groups() {
    let records: Vec<ScamRecord> = (0..20)
        .map(|i| rec(2024, &format!("Cat{i}"), "Sub", 1.0, 1))
        .collect();
    assert_eq!(aggregate(&records, 3).len(), 3);
    assert_eq!(aggregate(&records, 0).len(), 0);
    assert!(aggregate(&[], TOP_GROUPS).is_empty());
}

#[test]
fn output_owns_fresh_groups() {
    let records = vec![rec(2024, "Investment", "Crypto", 100.0, 5)];
    let first = aggregate(&records, TOP_GROUPS);
    let second = aggregate(&records, TOP_GROUPS);
    assert_eq!(first, second);
}

#[test]
fn yearly_totals_ascend_and_sum() {
    let records = vec![
        rec(2024, "Investment", "Crypto", 100.0, 5),
        rec(2022, "Phishing", "Email", 40.0, 3),
        rec(2024, "Phishing", "SMS", 60.0, 2),
        rec(2023, "Romance", "Dating", 25.0, 1),
    ];
    let totals = yearly_totals(&records);
    assert_eq!(totals, vec![(2022, 40.0), (2023, 25.0), (2024, 160.0)]);
}
