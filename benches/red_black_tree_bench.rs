//! Benchmark for RedBlackTree vs standard BTreeMap.
//!
//! Compares the arena-backed RedBlackTree against Rust's standard BTreeMap
//! (used as a counting multiset) for the core operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use redblack::tree::RedBlackTree;
use std::collections::BTreeMap;
use std::hint::black_box;

/// Deterministic scatter of `0..size` so that inserts are not sequential.
fn scattered(size: i64) -> impl Iterator<Item = i64> {
    (0..size).map(move |index| index * 7919 % size)
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut tree = RedBlackTree::new();
                    for key in scattered(size) {
                        tree.insert(black_box(key)).unwrap();
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map: BTreeMap<i64, usize> = BTreeMap::new();
                    for key in scattered(size) {
                        *map.entry(black_box(key)).or_default() += 1;
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// find Benchmark
// =============================================================================

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find");

    for size in [100, 1000, 10000] {
        let mut tree = RedBlackTree::new();
        tree.try_extend(scattered(size)).unwrap();
        let map: BTreeMap<i64, usize> = scattered(size).map(|key| (key, 1)).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for key in 0..size {
                        if tree.find(&black_box(key)).is_some() {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for key in 0..size {
                        if map.contains_key(&black_box(key)) {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// erase Benchmark
// =============================================================================

fn benchmark_erase(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("erase");

    for size in [100, 1000, 10000] {
        let mut tree = RedBlackTree::new();
        tree.try_extend(scattered(size)).unwrap();
        let map: BTreeMap<i64, usize> = scattered(size).map(|key| (key, 1)).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || tree.clone(),
                    |mut tree| {
                        for key in 0..size {
                            black_box(tree.remove(&key).unwrap());
                        }
                        tree
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || map.clone(),
                    |mut map| {
                        for key in 0..size {
                            black_box(map.remove(&key));
                        }
                        map
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// =============================================================================
// to_array Benchmark
// =============================================================================

fn benchmark_to_array(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("to_array");

    for size in [100, 1000, 10000] {
        let mut tree = RedBlackTree::new();
        tree.try_extend(scattered(size)).unwrap();
        let map: BTreeMap<i64, usize> = scattered(size).map(|key| (key, 1)).collect();
        let length = usize::try_from(size).unwrap();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &length,
            |bencher, &length| {
                let mut buffer = vec![0; length];
                bencher.iter(|| black_box(tree.to_array(&mut buffer).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &length,
            |bencher, &length| {
                let mut buffer = vec![0; length];
                bencher.iter(|| {
                    for (slot, (&key, _)) in buffer.iter_mut().zip(&map) {
                        *slot = key;
                    }
                    black_box(buffer.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_find,
    benchmark_erase,
    benchmark_to_array
);
criterion_main!(benches);
