// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered-set backend with linear nearest-neighbor scans. Slow but obviously
//! correct; used as a reference for [`KdTree`](crate::KdTree).

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use kurbo::Point;

use crate::error::Error;
use crate::point_index::PointIndex;
use crate::types::{Aabb2D, checked_domain_point, checked_point, checked_rect};

/// Point set backed by a `BTreeSet` ordered by y, then x.
///
/// `insert` and `contains` are logarithmic, `nearest` scans every point, and
/// `range` walks the ordered band of rows between the rectangle's bottom and
/// top before filtering on x.
#[derive(Clone, Default)]
pub struct PointSet {
    points: BTreeSet<SetKey>,
}

/// Total order over validated points: by y, then by x.
#[derive(Copy, Clone, Debug)]
struct SetKey(Point);

impl Ord for SetKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .y
            .total_cmp(&other.0.y)
            .then_with(|| self.0.x.total_cmp(&other.0.x))
    }
}

impl PartialOrd for SetKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SetKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SetKey {}

impl PointSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Build a set by inserting `points` in order. Stops at the first invalid point.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Result<Self, Error> {
        let mut set = Self::new();
        for p in points {
            set.insert(p)?;
        }
        Ok(set)
    }

    /// Add `p` unless it is already present. Same validation as [`KdTree::insert`](crate::KdTree::insert).
    pub fn insert(&mut self, p: Point) -> Result<bool, Error> {
        let p = checked_domain_point(p)?;
        Ok(self.points.insert(SetKey(p)))
    }

    /// Whether `p` is present.
    pub fn contains(&self, p: Point) -> Result<bool, Error> {
        let p = checked_point(p)?;
        Ok(self.points.contains(&SetKey(p)))
    }

    /// The closest point to `query` by linear scan; ties go to the lowest `(y, x)`.
    pub fn nearest(&self, query: Point) -> Result<Option<Point>, Error> {
        let query = checked_point(query)?;
        let mut best: Option<(Point, f64)> = None;
        for SetKey(p) in self.points.iter().copied() {
            let d = (p - query).hypot2();
            if best.map(|(_, bd)| d < bd).unwrap_or(true) {
                best = Some((p, d));
            }
        }
        Ok(best.map(|(p, _)| p))
    }

    /// All points inside `rect`, edges included, ordered by y then x.
    pub fn range(&self, rect: Aabb2D) -> Result<Vec<Point>, Error> {
        let rect = checked_rect(rect)?;
        let from = SetKey(Point::new(rect.min_x, rect.min_y));
        let to = SetKey(Point::new(rect.max_x, rect.max_y));
        Ok(self
            .points
            .range(from..=to)
            .map(|k| k.0)
            .filter(|p| rect.min_x <= p.x && p.x <= rect.max_x)
            .collect())
    }

    /// Iterate over the points ordered by y, then x.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|k| k.0)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointIndex for PointSet {
    fn insert(&mut self, p: Point) -> Result<bool, Error> {
        Self::insert(self, p)
    }

    fn contains(&self, p: Point) -> Result<bool, Error> {
        Self::contains(self, p)
    }

    fn nearest(&self, query: Point) -> Result<Option<Point>, Error> {
        Self::nearest(self, query)
    }

    fn range(&self, rect: Aabb2D) -> Result<Vec<Point>, Error> {
        Self::range(self, rect)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl Debug for PointSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointSet")
            .field("len", &self.points.len())
            .finish_non_exhaustive()
    }
}
