// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_range_tree::{Interval, RangePoint, RangeTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<[f64; 2]> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            // Jitter so columns and rows do not collapse into shared leaves.
            let jitter = ((x * 31 + y * 17) % 7) as f64 * 0.1;
            out.push([x as f64 * cell + jitter, y as f64 * cell + jitter]);
        }
    }
    out
}

fn naive_query<P: RangePoint>(values: &[P], ranges: &[Interval<P::Position>]) -> usize {
    values
        .iter()
        .filter(|v| {
            ranges
                .iter()
                .enumerate()
                .all(|(d, r)| r.contains(v.position_in(d)))
        })
        .count()
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_tree_build_query_f64");
    for &n in &[32_usize, 64, 128] {
        let points = gen_grid_points(n, 10.0);
        let ranges = [Interval::new(100.0, 500.0), Interval::new(100.0, 500.0)];
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("build_n{n}"), |b| {
            b.iter_batched(
                || points.clone(),
                |points| black_box(RangeTree::new(points)),
                BatchSize::SmallInput,
            );
        });

        let tree = RangeTree::new(points.clone());
        group.bench_function(format!("query_n{n}"), |b| {
            b.iter(|| black_box(tree.values_in_range(black_box(&ranges)).map(|v| v.len())));
        });

        group.bench_function(format!("naive_scan_n{n}"), |b| {
            b.iter(|| black_box(naive_query(&points, black_box(&ranges))));
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_tree_insert_f64");
    for &n in &[32_usize, 64] {
        let points = gen_grid_points(n, 10.0);
        let (base, extra) = points.split_at(points.len() / 2);
        group.throughput(Throughput::Elements(extra.len() as u64));

        group.bench_function(format!("insert_half_n{n}"), |b| {
            b.iter_batched(
                || RangeTree::new(base.iter().copied()),
                |mut tree| {
                    tree.extend(extra.iter().copied());
                    black_box(tree.len())
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("remove_half_n{n}"), |b| {
            b.iter_batched(
                || RangeTree::new(points.iter().copied()),
                |mut tree| {
                    for p in extra {
                        tree.remove(p);
                    }
                    black_box(tree.len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_query, bench_insert);
criterion_main!(benches);
