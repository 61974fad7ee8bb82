//! Criterion benchmarks for the selection sort engine.
//!
//! Compares random, already sorted and reverse sorted inputs, with the
//! standard library's unstable sort as a baseline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tally_bench::{descending, lcg_values};
use tally_core::{selection_sort, selection_sort_by};

const SIZES: [usize; 4] = [10, 100, 1000, 4000];

fn bench_selection_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_random");

    for size in SIZES {
        let input = lcg_values(size, 42, 100_000);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                selection_sort(black_box(&mut v));
                v
            });
        });
    }

    group.finish();
}

fn bench_selection_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_sorted");

    for size in SIZES {
        let input: Vec<i64> = (0..size as i64).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                selection_sort(black_box(&mut v));
                v
            });
        });
    }

    group.finish();
}

fn bench_selection_descending(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_descending");

    for size in SIZES {
        let input = descending(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                selection_sort(black_box(&mut v));
                v
            });
        });
    }

    group.finish();
}

fn bench_selection_floats(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_floats");

    for size in SIZES {
        let input: Vec<f64> = lcg_values(size, 7, 100_000)
            .into_iter()
            .map(|v| v as f64 + 0.5)
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                selection_sort_by(black_box(&mut v), f64::total_cmp);
                v
            });
        });
    }

    group.finish();
}

fn bench_std_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("std_sort_unstable");

    for size in SIZES {
        let input = lcg_values(size, 42, 100_000);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                black_box(&mut v).sort_unstable();
                v
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_selection_random,
    bench_selection_sorted,
    bench_selection_descending,
    bench_selection_floats,
    bench_std_baseline
);
criterion_main!(benches);
