// File: crates/scamviz-core/benches/aggregate_bench.rs
// Purpose: Benchmark the aggregation hot path over a synthetic dataset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scamviz_core::{aggregate, ScamRecord, TOP_GROUPS};

fn synthetic_records(n: usize) -> Vec<ScamRecord> {
    let level2 = [
        "Investment",
        "Phishing",
        "Romance",
        "Identity",
        "Online shopping",
        "Remote access",
        "Other",
    ];
    let level3 = ["Crypto", "Email", "SMS", "Dating", "Marketplace"];
    (0..n)
        .map(|i| ScamRecord {
            year: 2019 + (i % 6) as i32,
            category_level2: level2[i % level2.len()].to_string(),
            category_level3: level3[i % level3.len()].to_string(),
            amount: (i % 997) as f64 * 13.5,
            report_count: 1 + (i % 7) as u64,
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    c.bench_function("aggregate_10k", |b| {
        b.iter(|| aggregate(black_box(&records), TOP_GROUPS))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
