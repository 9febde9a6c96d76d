// ============================================================================
// Counting Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decimal - distinct range counting, dominated by the linear dedup scan
// 2. Float - first-match vs every-match range counting
// 3. Integer - cross-product membership tally
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use element_counter::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

fn benchmark_decimal_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_counter");

    for size in [100, 1000, 10_000].iter() {
        // Values cycle so the distinct set stays bounded at 500.
        let values: Vec<Decimal> = (0..*size)
            .map(|i| Decimal::new(i % 500, 1))
            .collect();
        let ranges: Vec<Option<Vec<Decimal>>> = (0..8)
            .map(|r| Some(vec![Decimal::from(r * 5), Decimal::from(r * 5 + 3)]))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("distinct", size),
            &(&values, &ranges),
            |b, (values, ranges)| {
                b.iter(|| {
                    black_box(count_distinct_in_ranges(
                        Some(values.as_slice()),
                        Some(ranges.as_slice()),
                    ))
                });
            },
        );
    }

    group.finish();
}

fn benchmark_float_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_counter");

    for size in [100, 1000, 10_000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| (i % 100) as f32 * 0.5).collect();
        let starts: Vec<f32> = (0..8).map(|r| r as f32 * 5.0).collect();
        let ends: Vec<f32> = starts.iter().map(|s| s + 7.5).collect();

        group.bench_with_input(
            BenchmarkId::new("first_match", size),
            &(&values, &starts, &ends),
            |b, (values, starts, ends)| {
                b.iter(|| {
                    black_box(count_in_ranges(
                        Some(values.as_slice()),
                        Some(starts.as_slice()),
                        Some(ends.as_slice()),
                    ))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("every_match", size),
            &(&values, &starts, &ends),
            |b, (values, starts, ends)| {
                b.iter(|| {
                    black_box(count_in_ranges_windowed(
                        Some(values.as_slice()),
                        Some(starts.as_slice()),
                        Some(ends.as_slice()),
                        0,
                        values.len() as i64,
                    ))
                });
            },
        );
    }

    group.finish();
}

fn benchmark_integer_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_counter");

    for num_needles in [1, 16, 256].iter() {
        let values: Vec<i32> = (0..10_000).map(|i| i % 1000).collect();
        let needles: Vec<i32> = (0..*num_needles).map(|i| i * 3).collect();

        group.bench_with_input(
            BenchmarkId::new("cross_product", num_needles),
            &(&values, &needles),
            |b, (values, needles)| {
                b.iter(|| {
                    black_box(count_matches(
                        Some(values.as_slice()),
                        Some(needles.as_slice()),
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_decimal_counter,
    benchmark_float_counter,
    benchmark_integer_counter
);
criterion_main!(benches);
