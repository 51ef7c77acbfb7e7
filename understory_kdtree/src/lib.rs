// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kdtree --heading-base-level=0

//! Understory 2d-tree: a point index over the unit square.
//!
//! This crate is a small building block for point lookups in normalized coordinates.
//!
//! - Insert points; coordinate-equal duplicates are absorbed.
//! - Test exact membership.
//! - Find the nearest stored point to any query point.
//! - Collect every stored point inside an axis-aligned rectangle, edges included.
//!
//! Points are [`kurbo::Point`]s and must lie in [`Aabb2D::UNIT`] when inserted; queries may
//! come from anywhere in the plane. Invalid arguments (non-finite coordinates, inverted
//! rectangles, points outside the unit square on insert) are rejected with
//! [`Error::InvalidArgument`] before anything is mutated.
//!
//! # Example
//!
//! ```rust
//! use understory_kdtree::{Aabb2D, KdTree, Point};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.2, 0.3)).unwrap();
//! tree.insert(Point::new(0.4, 0.7)).unwrap();
//! tree.insert(Point::new(0.9, 0.6)).unwrap();
//! assert_eq!(tree.len(), 3);
//!
//! // Nearest neighbor.
//! let p = tree.nearest(Point::new(0.35, 0.65)).unwrap();
//! assert_eq!(p, Some(Point::new(0.4, 0.7)));
//!
//! // Range query; bounds are inclusive.
//! let hits = tree.range(Aabb2D::new(0.1, 0.1, 0.5, 0.8)).unwrap();
//! assert_eq!(hits, vec![Point::new(0.2, 0.3), Point::new(0.4, 0.7)]);
//! ```
//!
//! ## Choosing a backend
//!
//! - `KdTree`: the 2d-tree. Insert and contains follow one root-to-leaf path;
//!   nearest and range prune subtrees by their bounding rectangles.
//! - `PointSet`: ordered set with linear nearest-neighbor scans. Use it as a
//!   reference when testing, or for very small sets.
//!
//! Both implement [`PointIndex`], so the same workload can drive either.
//!
//! ### Balance
//!
//! The tree never rebalances. Its shape is fully determined by insertion order, and sorted or
//! otherwise adversarial orders produce deep chains. Shuffle bulk input if that matters.
//!
//! ### Concurrency
//!
//! Insertion takes `&mut self` and queries take `&self`, so the borrow checker already enforces
//! a single writer with no concurrent readers. The types are `Send` and `Sync`.
//!
//! ### Drawing
//!
//! [`KdTree::split_lines`] exports every node's splitting line clipped to its rectangle,
//! which is enough to render the partition with any 2D drawing API.
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default) or `libm` feature
//! for Kurbo's float support.

#![no_std]

extern crate alloc;

pub mod backends;
pub mod error;
pub mod point_index;
pub mod split;
pub mod types;

pub use backends::kdtree::KdTree;
pub use backends::point_set::PointSet;
pub use error::Error;
pub use kurbo::Point;
pub use point_index::PointIndex;
pub use split::SplitLine;
pub use types::{Aabb2D, Axis};
