//! Benchmarks for the record search filter.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fake::{Fake, Faker};
use form_manager_tui::api::Record;
use form_manager_tui::utils::filter::filter_records;

fn records(count: usize) -> Vec<Record> {
    (0..count).map(|_| Faker.fake::<Record>()).collect()
}

fn bench_filter_by_name(c: &mut Criterion) {
    let records = records(1_000);
    c.bench_function("filter_1000_by_name", |b| {
        b.iter(|| filter_records(black_box(&records), black_box("ab")))
    });
}

fn bench_filter_empty_term(c: &mut Criterion) {
    let records = records(1_000);
    c.bench_function("filter_1000_empty_term", |b| {
        b.iter(|| filter_records(black_box(&records), black_box("")))
    });
}

criterion_group!(benches, bench_filter_by_name, bench_filter_empty_term);
criterion_main!(benches);
