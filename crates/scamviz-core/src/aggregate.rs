// File: crates/scamviz-core/src/aggregate.rs
// Summary: Two-level category aggregation feeding the bar and sunburst charts.

use std::collections::HashMap;

use crate::dataset::ScamRecord;

/// How many level-2 groups the dashboard charts show.
pub const TOP_GROUPS: usize = 5;

/// The catch-all bucket; never chart-worthy.
const CATCH_ALL: &str = "Other";

/// Summed level-3 subtype under one level-2 group.
#[derive(Clone, Debug, PartialEq)]
pub struct SubCategory {
    pub key: String,
    pub amount: f64,
    pub reports: u64,
}

/// Derived summary for one level-2 category.
///
/// Invariant: `total_amount` equals the sum of the children's amounts and
/// `total_reports` the sum of their report counts.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup {
    pub key: String,
    pub total_amount: f64,
    pub total_reports: u64,
    pub children: Vec<SubCategory>,
}

/// Aggregate records into at most `max_groups` level-2 groups.
///
/// Groups and their children keep first-seen dataset order; the result is
/// sorted descending by `total_reports` (stable, so ties keep that order),
/// the `"Other"` bucket is dropped, and the list is truncated to
/// `max_groups`. The output is freshly allocated on every call.
pub fn aggregate(records: &[ScamRecord], max_groups: usize) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let gi = match index.get(record.category_level2.as_str()) {
            Some(&i) => i,
            None => {
                groups.push(CategoryGroup {
                    key: record.category_level2.clone(),
                    total_amount: 0.0,
                    total_reports: 0,
                    children: Vec::new(),
                });
                index.insert(record.category_level2.as_str(), groups.len() - 1);
                groups.len() - 1
            }
        };
        let group = &mut groups[gi];
        match group
            .children
            .iter_mut()
            .find(|c| c.key == record.category_level3)
        {
            Some(child) => {
                child.amount += record.amount;
                child.reports += record.report_count;
            }
            None => group.children.push(SubCategory {
                key: record.category_level3.clone(),
                amount: record.amount,
                reports: record.report_count,
            }),
        }
    }

    // Level-2 totals are the sums over children, keeping the invariant exact.
    for group in &mut groups {
        group.total_amount = group.children.iter().map(|c| c.amount).sum();
        group.total_reports = group.children.iter().map(|c| c.reports).sum();
    }

    groups.retain(|g| g.key != CATCH_ALL);
    groups.sort_by(|a, b| b.total_reports.cmp(&a.total_reports));
    groups.truncate(max_groups);
    groups
}

/// Total reported amount per year, ascending by year. Feeds the line chart.
pub fn yearly_totals(records: &[ScamRecord]) -> Vec<(i32, f64)> {
    let mut totals: Vec<(i32, f64)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|(year, _)| *year == record.year) {
            Some((_, total)) => *total += record.amount,
            None => totals.push((record.year, record.amount)),
        }
    }
    totals.sort_by_key(|&(year, _)| year);
    totals
}
