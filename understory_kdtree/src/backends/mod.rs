// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations of [`PointIndex`](crate::PointIndex).
//!
//! - `kdtree`: 2d-tree with per-node bounding rectangles; logarithmic on
//!   typical inputs, pruned nearest-neighbor and range search.
//! - `point_set`: ordered set with linear nearest-neighbor scans; the
//!   reference the tree is checked against.
//!
//! Pruning note
//! ------------
//! Every tree node carries the rectangle its subtree is confined to. Range
//! search skips a subtree whose rectangle misses the query rectangle.
//! Nearest-neighbor search skips a subtree whose rectangle is at least as far
//! from the query as the best point found so far, and always descends first
//! into the child on the query's side of the splitting line so that a close
//! candidate is found early and prunes the other side.

pub mod kdtree;
pub mod point_set;
