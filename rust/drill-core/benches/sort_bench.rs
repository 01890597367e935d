//! Criterion benchmarks for the bubble sort.
//!
//! Reversed input is the worst case (every pair swaps on every pass);
//! already-sorted input exits after a single pass.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use drill_core::{bubble_sort, bubble_sort_by, Value};

const SIZES: [usize; 4] = [10, 100, 500, 2000];

fn bench_sort_reversed_ints(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_reversed_ints");

    for size in SIZES {
        let input: Vec<i64> = (0..size as i64).rev().collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut scratch = input.clone();
                let _ = bubble_sort(black_box(&mut scratch));
            });
        });
    }

    group.finish();
}

fn bench_sort_sorted_ints(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_sorted_ints");

    for size in SIZES {
        let input: Vec<i64> = (0..size as i64).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut scratch = input.clone();
                let _ = bubble_sort(black_box(&mut scratch));
            });
        });
    }

    group.finish();
}

fn bench_sort_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_values");

    for size in SIZES {
        // alternate Int / Float so every comparison crosses kinds
        let input: Vec<Value> = (0..size)
            .rev()
            .map(|i| {
                if i % 2 == 0 {
                    Value::Int(i as i64)
                } else {
                    Value::Float(i as f64 + 0.5)
                }
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut scratch = input.clone();
                let _ = bubble_sort_by(black_box(&mut scratch), Value::try_cmp);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sort_reversed_ints,
    bench_sort_sorted_ints,
    bench_sort_values
);
criterion_main!(benches);
