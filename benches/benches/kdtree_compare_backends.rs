// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_kdtree::{Aabb2D, KdTree, Point, PointIndex, PointSet};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_f64(), rng.next_f64()))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64(), rng.next_f64()));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let x = (cx + (rng.next_f64() - 0.5) * spread).clamp(0.0, 1.0);
            let y = (cy + (rng.next_f64() - 0.5) * spread).clamp(0.0, 1.0);
            out.push(Point::new(x, y));
        }
    }
    out
}

fn build<I: PointIndex + Default>(points: &[Point]) -> I {
    let mut idx = I::default();
    for p in points {
        idx.insert(*p).unwrap();
    }
    idx
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_random_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("kdtree_n{}", n), |b| {
            b.iter(|| black_box(build::<KdTree>(&points).len()));
        });
        group.bench_function(format!("point_set_n{}", n), |b| {
            b.iter(|| black_box(build::<PointSet>(&points).len()));
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let queries = gen_random_points(256, 0xFACE_FEED_CAFE_BABE);
    for &n in &[1_000usize, 10_000] {
        let points = gen_random_points(n, 0xCAFE_F00D_DEAD_BEEF);
        let tree: KdTree = build(&points);
        let set: PointSet = build(&points);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("kdtree_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.nearest(*q).ok());
                }
            });
        });
        group.bench_function(format!("point_set_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(set.nearest(*q).ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    let points = gen_random_points(10_000, 0xBADC_F00D_1234_5678);
    let tree: KdTree = build(&points);
    let set: PointSet = build(&points);
    for &w in &[0.01_f64, 0.1, 0.5] {
        let rect = Aabb2D::from_xywh(0.25, 0.25, w, w);
        group.bench_function(format!("kdtree_w{}", w), |b| {
            b.iter(|| black_box(tree.range(rect).map(|v| v.len())));
        });
        group.bench_function(format!("point_set_w{}", w), |b| {
            b.iter(|| black_box(set.range(rect).map(|v| v.len())));
        });
    }
    group.finish();
}

fn bench_clustered_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_clustered");
    let points = gen_clustered_points(16, 256, 0.05);
    let queries = gen_random_points(256, 0x1234_5678_9ABC_DEF0);
    group.bench_function("insert_then_nearest", |b| {
        b.iter_batched(
            KdTree::new,
            |mut tree| {
                for p in &points {
                    tree.insert(*p).unwrap();
                }
                let mut total = 0.0;
                for q in &queries {
                    if let Ok(Some((_, d))) = tree.nearest_with_distance(*q) {
                        total += d;
                    }
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_degenerate_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_sorted_input");
    let mut points = gen_random_points(2_000, 0x0DDB_A11_5EED_0001);
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    let tree: KdTree = build(&points);
    let q = Point::new(0.5, 0.5);
    group.bench_function("nearest_on_chain", |b| {
        b.iter(|| black_box(tree.nearest(q).ok()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_nearest,
    bench_range,
    bench_clustered_build_query,
    bench_degenerate_order,
);
criterion_main!(benches);
