// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay one workload against both backends and check they agree.
//!
//! Run:
//! - `cargo run -p understory_kdtree_demos --example kdtree_vs_point_set`

use understory_kdtree::{Aabb2D, KdTree, Point, PointIndex, PointSet};

/// Deterministic pseudo-random points on a 1/16 lattice, so duplicates occur.
fn lattice(count: usize) -> Vec<Point> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let x = (state & 0xF) as f64 / 16.0;
            let y = ((state >> 4) & 0xF) as f64 / 16.0;
            Point::new(x, y)
        })
        .collect()
}

fn run<I: PointIndex>(
    name: &str,
    index: &mut I,
    points: &[Point],
) -> (usize, Option<Point>, usize) {
    let added = points
        .iter()
        .filter(|p| index.insert(**p).unwrap())
        .count();
    let nearest = index.nearest(Point::new(0.51, 0.49)).unwrap();
    let in_range = index
        .range(Aabb2D::new(0.25, 0.25, 0.75, 0.75))
        .unwrap()
        .len();
    println!(
        "{name}: added={added} len={} nearest={nearest:?} in_range={in_range}",
        index.len()
    );
    (index.len(), nearest, in_range)
}

fn main() {
    let points = lattice(400);
    let a = run("kdtree", &mut KdTree::new(), &points);
    let b = run("point_set", &mut PointSet::new(), &points);
    assert_eq!(a.0, b.0, "sizes differ");
    assert_eq!(a.2, b.2, "range counts differ");
}
