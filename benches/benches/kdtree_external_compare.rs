// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_kdtree::{Aabb2D, KdTree, Point};

use rstar::{AABB, RTree};

fn gen_lattice_points(n: usize) -> Vec<Point> {
    let total = n * n;
    let step = 1.0 / n as f64;
    // Visit cells in a scrambled order (7919 is coprime with the power-of-two
    // totals used below) so insertion does not build a chain.
    (0..total)
        .map(|i| {
            let j = (i * 7919) % total;
            Point::new((j % n) as f64 * step, (j / n) as f64 * step)
        })
        .collect()
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_kdtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_lattice_points(n);
        let rect = Aabb2D::from_xywh(0.1, 0.1, 0.4, 0.4);
        let query = Point::new(0.333, 0.667);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                KdTree::new,
                |mut tree| {
                    for p in points.iter().copied() {
                        tree.insert(p).unwrap();
                    }
                    let hits = tree.range(rect).map(|v| v.len());
                    black_box((hits, tree.nearest(query).ok()));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb =
                        AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box((hits, tree.nearest_neighbor(&[query.x, query.y]).copied()));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kdtree_external_compare);
criterion_main!(benches);
