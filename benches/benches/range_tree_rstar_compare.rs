// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_range_tree::{Interval, RangeTree};

use rstar::{AABB, RTree};

fn gen_scattered_points(count: usize, extent: f64) -> Vec<[f64; 2]> {
    // Deterministic xorshift so every run sees the same distribution.
    let mut state = 0x2545_F491_4F6C_DD1D_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1_u64 << 53) as f64
    };
    (0..count).map(|_| [next() * extent, next() * extent]).collect()
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_tree_rstar_compare_f64");
    for &count in &[4_096_usize, 16_384] {
        let points = gen_scattered_points(count, 1000.0);
        let (lo, hi) = ([250.0, 250.0], [500.0, 500.0]);
        let ranges = [Interval::new(lo[0], hi[0]), Interval::new(lo[1], hi[1])];
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(format!("understory_build_query_n{count}"), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RangeTree::new(points);
                    black_box(tree.values_in_range(&ranges).map(|v| v.len()))
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{count}"), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    let aabb = AABB::from_corners(lo, hi);
                    black_box(tree.locate_in_envelope(&aabb).count())
                },
                BatchSize::SmallInput,
            );
        });

        let tree = RangeTree::new(points.clone());
        group.bench_function(format!("understory_query_n{count}"), |b| {
            b.iter(|| black_box(tree.values_in_range(black_box(&ranges)).map(|v| v.len())));
        });

        let rtree = RTree::bulk_load(points.clone());
        let aabb = AABB::from_corners(lo, hi);
        group.bench_function(format!("rstar_query_n{count}"), |b| {
            b.iter(|| black_box(rtree.locate_in_envelope(black_box(&aabb)).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
