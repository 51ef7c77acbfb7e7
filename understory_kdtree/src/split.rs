// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting lines of a [`KdTree`](crate::KdTree), for drawing the partition.

use kurbo::{Line, Point};

use crate::types::{Aabb2D, Axis};

/// One node's splitting line, clipped to the node's bounding rectangle.
///
/// Returned by [`KdTree::split_lines`](crate::KdTree::split_lines).
/// Renderers conventionally draw [`Axis::X`] splits (vertical lines) and
/// [`Axis::Y`] splits (horizontal lines) in different colors and the
/// `point` itself as a dot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitLine {
    /// The point stored at the node.
    pub point: Point,
    /// The node's splitting axis.
    pub axis: Axis,
    /// The splitting line through `point`, spanning the node's rectangle.
    pub line: Line,
}

impl SplitLine {
    pub(crate) fn new(point: Point, axis: Axis, bounds: &Aabb2D) -> Self {
        let line = match axis {
            Axis::X => Line::new((point.x, bounds.min_y), (point.x, bounds.max_y)),
            Axis::Y => Line::new((bounds.min_x, point.y), (bounds.max_x, point.y)),
        };
        Self { point, axis, line }
    }

    /// Whether the line is vertical, i.e. the node splits on x.
    pub fn is_vertical(&self) -> bool {
        self.axis == Axis::X
    }
}
