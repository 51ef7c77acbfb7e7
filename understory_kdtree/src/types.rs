// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and argument validation helpers.

use core::cmp::Ordering;

use kurbo::{Point, Rect};

use crate::error::Error;

/// Axis-aligned rectangle in 2D with inclusive bounds.
///
/// Unlike [`kurbo::Rect::contains`], which is half-open, every predicate here
/// treats the edges as part of the rectangle: a point lying exactly on
/// `max_x` is contained, and two rectangles sharing an edge intersect.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2D {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (top)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (bottom)
    pub max_y: f64,
}

impl Aabb2D {
    /// The unit square `[0, 1] × [0, 1]`, the domain covered by a [`KdTree`](crate::KdTree) root.
    pub const UNIT: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create an AABB from origin and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }

    /// Whether this AABB contains the point, edges included.
    pub fn contains_point(&self, p: Point) -> bool {
        le(self.min_x, p.x) && le(self.min_y, p.y) && le(p.x, self.max_x) && le(p.y, self.max_y)
    }

    /// Whether `other` lies entirely inside this AABB.
    pub fn contains_rect(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(self.min_y, other.min_y)
            && le(other.max_x, self.max_x)
            && le(other.max_y, self.max_y)
    }

    /// The intersection of two AABBs. May be empty; check with [`Aabb2D::is_empty`].
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min_x: max_t(self.min_x, other.min_x),
            min_y: max_t(self.min_y, other.min_y),
            max_x: min_t(self.max_x, other.max_x),
            max_y: min_t(self.max_y, other.max_y),
        }
    }

    /// Whether the two AABBs share at least one point. Touching edges count.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Return true if the AABB is inverted (no points at all). Assumes no NaN.
    ///
    /// Degenerate boxes with zero width or height are not empty: they still
    /// contain the points on their edge.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y)
    }

    /// Squared Euclidean distance from `p` to the closest point of this AABB.
    ///
    /// Zero when `p` is inside or on the boundary.
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        let dx = if p.x < self.min_x {
            self.min_x - p.x
        } else if p.x > self.max_x {
            p.x - self.max_x
        } else {
            0.0
        };
        let dy = if p.y < self.min_y {
            self.min_y - p.y
        } else if p.y > self.max_y {
            p.y - self.max_y
        } else {
            0.0
        };
        dx * dx + dy * dy
    }

    /// Split this AABB along `axis` at `at`, returning the `(left, right)` halves.
    ///
    /// The left half keeps everything at or below `at` on that axis, the right
    /// half everything at or above it. Both halves share the splitting line.
    pub fn split(&self, axis: Axis, at: f64) -> (Self, Self) {
        match axis {
            Axis::X => (
                Self::new(self.min_x, self.min_y, at, self.max_y),
                Self::new(at, self.min_y, self.max_x, self.max_y),
            ),
            Axis::Y => (
                Self::new(self.min_x, self.min_y, self.max_x, at),
                Self::new(self.min_x, at, self.max_x, self.max_y),
            ),
        }
    }
}

impl From<Rect> for Aabb2D {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Aabb2D> for Rect {
    fn from(a: Aabb2D) -> Self {
        Self::new(a.min_x, a.min_y, a.max_x, a.max_y)
    }
}

/// Splitting axis of a 2d-tree node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical splitting line; children are routed by x.
    X,
    /// Horizontal splitting line; children are routed by y.
    Y,
}

impl Axis {
    /// The other axis. Children always split on the flipped axis of their parent.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The coordinate of `p` along this axis.
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}

/// Validate a query point and canonicalize negative zero.
///
/// `-0.0` and `0.0` compare equal but order differently under `total_cmp`,
/// so both backends store and compare the canonical form.
pub(crate) fn checked_point(p: Point) -> Result<Point, Error> {
    if !(p.x.is_finite() && p.y.is_finite()) {
        tracing::debug!(x = p.x, y = p.y, "rejected non-finite point");
        return Err(Error::InvalidArgument("point coordinates must be finite"));
    }
    Ok(Point::new(p.x + 0.0, p.y + 0.0))
}

/// Validate a point that is about to be stored.
///
/// Stored points must lie in [`Aabb2D::UNIT`] so every node's point stays
/// inside its own bounding rectangle.
pub(crate) fn checked_domain_point(p: Point) -> Result<Point, Error> {
    let p = checked_point(p)?;
    if !Aabb2D::UNIT.contains_point(p) {
        tracing::debug!(x = p.x, y = p.y, "rejected point outside the unit square");
        return Err(Error::InvalidArgument("point must lie in the unit square"));
    }
    Ok(p)
}

/// Validate a query rectangle and canonicalize negative zero bounds.
pub(crate) fn checked_rect(r: Aabb2D) -> Result<Aabb2D, Error> {
    let finite = r.min_x.is_finite()
        && r.min_y.is_finite()
        && r.max_x.is_finite()
        && r.max_y.is_finite();
    if !finite {
        tracing::debug!(?r, "rejected non-finite rectangle");
        return Err(Error::InvalidArgument("rectangle bounds must be finite"));
    }
    if r.is_empty() {
        tracing::debug!(?r, "rejected inverted rectangle");
        return Err(Error::InvalidArgument("rectangle min must not exceed max"));
    }
    Ok(Aabb2D::new(
        r.min_x + 0.0,
        r.min_y + 0.0,
        r.max_x + 0.0,
        r.max_y + 0.0,
    ))
}

fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        a - b < 1e-12 && b - a < 1e-12
    }

    #[test]
    fn contains_point_is_inclusive() {
        let r = Aabb2D::new(0.1, 0.1, 0.5, 0.8);
        assert!(r.contains_point(Point::new(0.1, 0.1)));
        assert!(r.contains_point(Point::new(0.5, 0.8)));
        assert!(r.contains_point(Point::new(0.3, 0.8)));
        assert!(!r.contains_point(Point::new(0.50001, 0.3)));
    }

    #[test]
    fn touching_rects_intersect() {
        let a = Aabb2D::new(0.0, 0.0, 0.5, 0.5);
        let b = Aabb2D::new(0.5, 0.0, 1.0, 0.5);
        let c = Aabb2D::new(0.6, 0.6, 1.0, 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn distance_squared_outside_edge_and_corner() {
        let r = Aabb2D::new(0.2, 0.2, 0.4, 0.4);
        assert_eq!(r.distance_squared_to(Point::new(0.3, 0.3)), 0.0);
        assert_eq!(r.distance_squared_to(Point::new(0.4, 0.2)), 0.0);
        let d = r.distance_squared_to(Point::new(0.3, 0.9));
        assert!(close(d, 0.25), "edge distance was {d}");
        let d = r.distance_squared_to(Point::new(0.0, 0.0));
        assert!(close(d, 0.08), "corner distance was {d}");
    }

    #[test]
    fn split_shares_the_line() {
        let (l, r) = Aabb2D::UNIT.split(Axis::X, 0.25);
        assert_eq!(l, Aabb2D::new(0.0, 0.0, 0.25, 1.0));
        assert_eq!(r, Aabb2D::new(0.25, 0.0, 1.0, 1.0));
        let (b, t) = r.split(Axis::Y, 0.75);
        assert_eq!(b, Aabb2D::new(0.25, 0.0, 1.0, 0.75));
        assert_eq!(t, Aabb2D::new(0.25, 0.75, 1.0, 1.0));
        assert!(Aabb2D::UNIT.contains_rect(&t));
    }

    #[test]
    fn kurbo_rect_conversion_normalizes() {
        let a: Aabb2D = Rect::new(0.9, 0.8, 0.1, 0.2).into();
        assert_eq!(a, Aabb2D::new(0.1, 0.2, 0.9, 0.8));
        let back: Rect = a.into();
        assert_eq!(back, Rect::new(0.1, 0.2, 0.9, 0.8));
    }

    #[test]
    fn validation_rejects_bad_arguments() {
        assert!(checked_point(Point::new(f64::NAN, 0.5)).is_err());
        assert!(checked_point(Point::new(0.5, f64::INFINITY)).is_err());
        assert_eq!(checked_point(Point::new(2.0, -3.0)), Ok(Point::new(2.0, -3.0)));
        assert!(checked_domain_point(Point::new(1.5, 0.5)).is_err());
        assert!(checked_rect(Aabb2D::new(0.5, 0.0, 0.4, 1.0)).is_err());
        assert!(checked_rect(Aabb2D::new(0.0, f64::NAN, 1.0, 1.0)).is_err());
        assert!(checked_rect(Aabb2D::new(0.3, 0.3, 0.3, 0.3)).is_ok());
    }

    #[test]
    fn negative_zero_is_canonicalized() {
        let p = checked_point(Point::new(-0.0, 0.5)).unwrap();
        assert!(p.x.is_sign_positive());
    }
}
