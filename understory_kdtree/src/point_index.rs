// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point index trait implemented by every backend.

use alloc::vec::Vec;

use kurbo::Point;

use crate::error::Error;
use crate::types::Aabb2D;

/// A mutable set of points in the unit square with spatial queries.
///
/// Implemented by [`KdTree`](crate::KdTree) and by the linear-scan
/// [`PointSet`](crate::PointSet), so a workload can be replayed against both
/// and the results compared.
pub trait PointIndex {
    /// Add `p` unless a coordinate-equal point is already stored.
    ///
    /// Returns `Ok(true)` if the point was added and `Ok(false)` if it was a duplicate.
    fn insert(&mut self, p: Point) -> Result<bool, Error>;

    /// Whether a coordinate-equal point is stored.
    fn contains(&self, p: Point) -> Result<bool, Error>;

    /// The stored point closest to `query`, or `None` if the index is empty.
    fn nearest(&self, query: Point) -> Result<Option<Point>, Error>;

    /// All stored points inside `rect`, edges included.
    fn range(&self, rect: Aabb2D) -> Result<Vec<Point>, Error>;

    /// Number of distinct points stored.
    fn len(&self) -> usize;

    /// Whether no point has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
