// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2d-tree backend: an unbalanced binary space partition of the unit square.
//!
//! Each node stores one point, a splitting axis that alternates with depth
//! (x at the root), and the rectangle its subtree is confined to. Children are
//! routed by comparing coordinates on the node's axis: strictly greater goes
//! right, everything else goes left. A point equal on the axis but different
//! elsewhere therefore descends left, which keeps tree shape reproducible for
//! a given insertion order.
//!
//! There is no rebalancing. Inserting points in sorted order builds a chain
//! as deep as the point count; queries stay correct but lose their pruning
//! advantage.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::error::Error;
use crate::point_index::PointIndex;
use crate::split::SplitLine;
use crate::types::{Aabb2D, Axis, checked_domain_point, checked_point, checked_rect};

/// 2d-tree over points in the unit square.
///
/// Nodes live in an arena and are never removed, so the arena length is the
/// number of stored points.
#[derive(Clone, Default)]
pub struct KdTree {
    root: Option<NodeIdx>,
    arena: Vec<KdNode>,
}

#[derive(Clone, Debug)]
struct KdNode {
    point: Point,
    axis: Axis,
    bounds: Aabb2D,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

impl KdNode {
    const fn new(point: Point, axis: Axis, bounds: Aabb2D) -> Self {
        Self {
            point,
            axis,
            bounds,
            left: None,
            right: None,
        }
    }

    /// Which child `p` belongs under, or `None` if this node holds `p`.
    fn route(&self, p: Point) -> Option<Side> {
        if self.axis.coord(p) > self.axis.coord(self.point) {
            Some(Side::Right)
        } else if self.point == p {
            None
        } else {
            Some(Side::Left)
        }
    }

    fn child(&self, side: Side) -> Option<NodeIdx> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Children ordered so the one on the query's side of the split comes first.
    fn near_far(&self, query: Point) -> [Option<NodeIdx>; 2] {
        if self.axis.coord(query) > self.axis.coord(self.point) {
            [self.right, self.left]
        } else {
            [self.left, self.right]
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

/// Best candidate found so far by a nearest-neighbor search.
#[derive(Copy, Clone, Debug)]
struct Best {
    idx: NodeIdx,
    dist_sq: f64,
}

impl KdTree {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
        }
    }

    /// Build a tree by inserting `points` in order.
    ///
    /// Duplicates are skipped. Stops at the first point that fails validation.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Result<Self, Error> {
        let mut tree = Self::new();
        for p in points {
            tree.insert(p)?;
        }
        Ok(tree)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree has no root yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn node(&self, idx: NodeIdx) -> &KdNode {
        &self.arena[idx.get()]
    }

    fn push(&mut self, node: KdNode) -> NodeIdx {
        let idx = NodeIdx::new(self.arena.len());
        self.arena.push(node);
        idx
    }

    /// Add `p` unless a coordinate-equal point is already stored.
    ///
    /// Returns `Ok(true)` when a node was attached and `Ok(false)` for a duplicate.
    /// Fails with [`Error::InvalidArgument`] if a coordinate is not finite or
    /// the point lies outside [`Aabb2D::UNIT`]; the tree is untouched in that case.
    /// Nearest-neighbor pruning relies on every node's rectangle containing its
    /// point, and child rectangles are carved from the unit square, so a point
    /// outside it would be skipped by [`KdTree::nearest`] even when closest.
    pub fn insert(&mut self, p: Point) -> Result<bool, Error> {
        let p = checked_domain_point(p)?;
        let Some(root) = self.root else {
            self.root = Some(self.push(KdNode::new(p, Axis::X, Aabb2D::UNIT)));
            tracing::trace!(x = p.x, y = p.y, "created root");
            return Ok(true);
        };

        let mut idx = root;
        let mut depth = 0_usize;
        loop {
            let node = self.node(idx);
            let Some(side) = node.route(p) else {
                return Ok(false);
            };
            if let Some(next) = node.child(side) {
                idx = next;
                depth += 1;
                continue;
            }

            let (left, right) = node.bounds.split(node.axis, node.axis.coord(node.point));
            let bounds = match side {
                Side::Left => left,
                Side::Right => right,
            };
            let axis = node.axis.flip();
            let child = self.push(KdNode::new(p, axis, bounds));
            let parent = &mut self.arena[idx.get()];
            match side {
                Side::Left => parent.left = Some(child),
                Side::Right => parent.right = Some(child),
            }
            tracing::trace!(x = p.x, y = p.y, depth = depth + 1, ?axis, "attached node");
            return Ok(true);
        }
    }

    /// Whether a coordinate-equal point is stored.
    ///
    /// Follows the same path [`KdTree::insert`] would take for `p`.
    pub fn contains(&self, p: Point) -> Result<bool, Error> {
        let p = checked_point(p)?;
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            match node.route(p) {
                None => return Ok(true),
                Some(side) => cursor = node.child(side),
            }
        }
        Ok(false)
    }

    /// The stored point closest to `query`, or `None` if the tree is empty.
    ///
    /// When several points are equally close, the first one met in search order wins.
    pub fn nearest(&self, query: Point) -> Result<Option<Point>, Error> {
        Ok(self.nearest_with_distance(query)?.map(|(p, _)| p))
    }

    /// Like [`KdTree::nearest`], also returning the squared distance to the result.
    pub fn nearest_with_distance(&self, query: Point) -> Result<Option<(Point, f64)>, Error> {
        let query = checked_point(query)?;
        Ok(self
            .nearest_search(query, |_| {})
            .map(|best| (self.node(best.idx).point, best.dist_sq)))
    }

    /// Depth-first search from the root, seeded with the root's point.
    ///
    /// A node is examined only if its rectangle is strictly closer than the
    /// current best; nothing inside it can beat the best otherwise. The far
    /// child is pushed under the near one, so it is re-checked against the
    /// bound the near subtree tightened. `on_visit` sees each examined point.
    fn nearest_search(&self, query: Point, mut on_visit: impl FnMut(Point)) -> Option<Best> {
        let root = self.root?;
        let mut best = Best {
            idx: root,
            dist_sq: (self.node(root).point - query).hypot2(),
        };
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = self.node(idx);
            if idx != root && node.bounds.distance_squared_to(query) >= best.dist_sq {
                continue;
            }
            on_visit(node.point);
            let dist_sq = (node.point - query).hypot2();
            if dist_sq < best.dist_sq {
                best = Best { idx, dist_sq };
            }
            let [near, far] = node.near_far(query);
            for child in [far, near].into_iter().flatten() {
                if self.node(child).bounds.distance_squared_to(query) < best.dist_sq {
                    stack.push(child);
                }
            }
        }
        Some(best)
    }

    /// All stored points inside `rect`, edges included, in pre-order.
    ///
    /// Fails with [`Error::InvalidArgument`] if `rect` has a non-finite bound
    /// or is inverted.
    pub fn range(&self, rect: Aabb2D) -> Result<Vec<Point>, Error> {
        let rect = checked_rect(rect)?;
        Ok(self.range_search(rect, |_| {}))
    }

    /// Pre-order walk skipping subtrees whose rectangle misses `rect`.
    /// `on_visit` sees the point of every node whose rectangle is examined.
    fn range_search(&self, rect: Aabb2D, mut on_visit: impl FnMut(Point)) -> Vec<Point> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeIdx> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let node = self.node(idx);
            if !node.bounds.intersects(&rect) {
                continue;
            }
            on_visit(node.point);
            if rect.contains_point(node.point) {
                out.push(node.point);
            }
            // Right first so the left subtree is visited first.
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    /// Iterate over the stored points in pre-order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let mut stack: Vec<NodeIdx> = self.root.into_iter().collect();
        core::iter::from_fn(move || {
            let node = self.node(stack.pop()?);
            stack.extend(node.right);
            stack.extend(node.left);
            Some(node.point)
        })
    }

    /// Number of nodes on the longest root-to-leaf path; `0` when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeIdx, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(idx);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Splitting lines of every node, left subtree first, then the node, then
    /// the right subtree.
    pub fn split_lines(&self) -> Vec<SplitLine> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;
        loop {
            while let Some(idx) = cursor {
                stack.push(idx);
                cursor = self.node(idx).left;
            }
            let Some(idx) = stack.pop() else {
                break;
            };
            let node = self.node(idx);
            out.push(SplitLine::new(node.point, node.axis, &node.bounds));
            cursor = node.right;
        }
        out
    }
}

impl PointIndex for KdTree {
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

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl Debug for KdTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}
