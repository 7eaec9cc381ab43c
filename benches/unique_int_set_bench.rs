//! UniqueIntSet insertion and lookup benchmarks.
//!
//! Compares `insert` on fresh values, `insert` of duplicates, and `contains`
//! across sizes on both sides of the scan/hashed index switch.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unique_int_set::set::UniqueIntSet;

const SIZES: [i32; 5] = [8, 32, 100, 1000, 10000];

fn benchmark_insert_fresh(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_int_set_insert_fresh");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("insert", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = UniqueIntSet::new();
                for value in 0..size {
                    set.insert(black_box(value));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

fn benchmark_insert_duplicates(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_int_set_insert_duplicates");

    for size in SIZES {
        let base: UniqueIntSet = (0..size).collect();
        group.bench_with_input(
            BenchmarkId::new("insert_duplicate", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base.clone(),
                    |mut set| {
                        for value in 0..size {
                            set.insert(black_box(value));
                        }
                        set
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_int_set_contains");

    for size in SIZES {
        let set: UniqueIntSet = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("hit", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(set.contains(black_box(size - 1))));
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(set.contains(black_box(size))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_fresh,
    benchmark_insert_duplicates,
    benchmark_contains
);
criterion_main!(benches);
