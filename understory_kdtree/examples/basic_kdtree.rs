// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of the Understory 2d-tree: insert, membership, nearest, and range queries.

use understory_kdtree::{Aabb2D, Error, KdTree, Point};

fn main() -> Result<(), Error> {
    let mut tree = KdTree::new();
    for (x, y) in [(0.2, 0.3), (0.4, 0.7), (0.9, 0.6), (0.4, 0.7)] {
        let added = tree.insert(Point::new(x, y))?;
        println!("insert ({x}, {y}): added={added}");
    }
    println!("len={} height={}", tree.len(), tree.height());

    let q = Point::new(0.35, 0.65);
    println!("contains {:?}: {}", q, tree.contains(q)?);
    println!("nearest to {:?}: {:?}", q, tree.nearest_with_distance(q)?);

    // Query a rectangle
    let hits = tree.range(Aabb2D::new(0.1, 0.1, 0.5, 0.8))?;
    println!("hits in [0.1, 0.5] x [0.1, 0.8]: {:?}", hits);
    Ok(())
}
