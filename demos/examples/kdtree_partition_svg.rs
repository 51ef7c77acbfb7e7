// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render the partition of a KdTree as SVG.
//!
//! Vertical (x) splits are drawn in red, horizontal (y) splits in blue, and
//! points in black, with the unit square mapped to a 512×512 canvas.
//!
//! Run:
//! - `cargo run -p understory_kdtree_demos --example kdtree_partition_svg > partition.svg`

use kurbo::Affine;
use understory_kdtree::{KdTree, Point};

const SIZE: f64 = 512.0;

fn main() {
    let points = [
        (0.7, 0.2),
        (0.5, 0.4),
        (0.2, 0.3),
        (0.4, 0.7),
        (0.9, 0.6),
        (0.6, 0.85),
        (0.15, 0.8),
        (0.3, 0.1),
    ];
    let tree = KdTree::from_points(points.map(|(x, y)| Point::new(x, y))).unwrap();

    // Flip y so the origin sits at the bottom-left like a plot.
    let to_px = Affine::new([SIZE, 0.0, 0.0, -SIZE, 0.0, SIZE]);

    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}">"#);
    println!(r#"  <rect width="{SIZE}" height="{SIZE}" fill="none" stroke="black"/>"#);
    for split in tree.split_lines() {
        let (a, b) = (to_px * split.line.p0, to_px * split.line.p1);
        let color = if split.is_vertical() { "red" } else { "blue" };
        println!(
            r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{color}"/>"#,
            a.x, a.y, b.x, b.y
        );
    }
    for split in tree.split_lines() {
        let p = to_px * split.point;
        println!(r#"  <circle cx="{:.1}" cy="{:.1}" r="3" fill="black"/>"#, p.x, p.y);
    }
    println!("</svg>");
}
