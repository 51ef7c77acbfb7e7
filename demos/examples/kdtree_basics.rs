// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! KdTree basics.
//!
//! Insert a few points, absorb a duplicate, and run every query once.
//!
//! Run:
//! - `cargo run -p understory_kdtree_demos --example kdtree_basics`

use understory_kdtree::{Aabb2D, KdTree, Point};

fn main() {
    let mut tree = KdTree::new();
    for p in [
        Point::new(0.2, 0.3),
        Point::new(0.4, 0.7),
        Point::new(0.9, 0.6),
    ] {
        tree.insert(p).unwrap();
    }
    assert!(!tree.insert(Point::new(0.2, 0.3)).unwrap(), "duplicate is absorbed");
    println!("len: {}", tree.len());

    println!("contains (0.4, 0.7): {}", tree.contains(Point::new(0.4, 0.7)).unwrap());
    println!("contains (0.5, 0.5): {}", tree.contains(Point::new(0.5, 0.5)).unwrap());

    let nearest = tree.nearest(Point::new(0.35, 0.65)).unwrap();
    println!("nearest to (0.35, 0.65): {:?}", nearest);
    assert_eq!(nearest, Some(Point::new(0.4, 0.7)), "nearest should be (0.4, 0.7)");

    let hits = tree.range(Aabb2D::new(0.1, 0.1, 0.5, 0.8)).unwrap();
    println!("in [0.1, 0.5] x [0.1, 0.8]: {:?}", hits);

    // Arguments the tree cannot store are rejected, not clamped.
    let err = tree.insert(Point::new(1.5, 0.5)).unwrap_err();
    println!("insert (1.5, 0.5): {err}");
}
