// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `RangeTree` API over the persistent node structure.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::error::QueryError;
use crate::node::Node;
use crate::point::RangePoint;
use crate::remove::Removal;
use crate::types::Interval;

/// A persistent multidimensional range tree.
///
/// Every mutation produces a new root that shares all untouched subtrees with
/// the previous one, so [`Clone`] is a constant-time snapshot: clones are
/// unaffected by later inserts or removals on the original.
pub struct RangeTree<P: RangePoint> {
    root: Arc<Node<P>>,
    len: usize,
}

impl<P: RangePoint> RangeTree<P> {
    /// Build a balanced tree over `values`.
    ///
    /// Points with equal positions on a dimension share a single leaf there.
    pub fn new(values: impl IntoIterator<Item = P>) -> Self {
        const { assert!(P::DIMENSIONS > 0, "range tree points need at least one dimension") };
        let values: Vec<P> = values.into_iter().collect();
        let len = values.len();
        let root = Node::build(values, 0);
        tracing::debug!(
            len,
            dimensions = P::DIMENSIONS,
            weight = root.weight(),
            "built range tree"
        );
        Self {
            root: Arc::new(root),
            len,
        }
    }

    /// Number of points stored, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the dimension-0 tree, sentinels included.
    ///
    /// Insertion never rebalances, so this can grow linearly with skewed input.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Every point, in ascending order of its dimension-0 position.
    pub fn values(&self) -> Vec<P> {
        self.root.values()
    }

    /// Insert `value`.
    ///
    /// Only the path to the insertion point is copied; clones taken earlier
    /// keep seeing the tree without `value`.
    pub fn insert(&mut self, value: P) {
        self.root = Arc::new(self.root.insert(value, 0));
        self.len += 1;
        tracing::trace!(len = self.len, weight = self.root.weight(), "inserted point");
    }

    /// All points lying within `ranges`, one inclusive interval per dimension.
    ///
    /// A 1D tree reports points in ascending position order; with more
    /// dimensions the order is unspecified. Duplicates are all reported.
    /// An inverted interval (`min > max`) selects nothing.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DimensionMismatch`] if `ranges.len()` differs
    /// from [`RangePoint::DIMENSIONS`].
    pub fn values_in_range(&self, ranges: &[Interval<P::Position>]) -> Result<Vec<P>, QueryError> {
        if ranges.len() != P::DIMENSIONS {
            return Err(QueryError::DimensionMismatch {
                expected: P::DIMENSIONS,
                found: ranges.len(),
            });
        }
        let mut out = Vec::new();
        self.root.query(ranges, &mut out);
        tracing::trace!(hits = out.len(), "range query");
        Ok(out)
    }
}

impl<P: RangePoint + PartialEq> RangeTree<P> {
    /// Remove one point equal to `value`.
    ///
    /// Returns `false`, leaving the tree unchanged, if no such point exists.
    /// When several equal points are stored only one of them is removed.
    pub fn remove(&mut self, value: &P) -> bool {
        match self.root.remove(value, 0) {
            Removal::NotFound => return false,
            Removal::Replaced(root) => self.root = root,
            // A sentinel-bounded root never empties.
            Removal::Emptied => self.root = Arc::new(Node::empty(0)),
        }
        self.len -= 1;
        tracing::trace!(len = self.len, weight = self.root.weight(), "removed point");
        true
    }
}

impl<P: RangePoint> Clone for RangeTree<P> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
            len: self.len,
        }
    }
}

impl<P: RangePoint> Default for RangeTree<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P: RangePoint> FromIterator<P> for RangeTree<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<P: RangePoint> Extend<P> for RangeTree<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<P: RangePoint> fmt::Debug for RangeTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeTree")
            .field("len", &self.len)
            .field("dimensions", &P::DIMENSIONS)
            .field("height", &self.root.height())
            .finish_non_exhaustive()
    }
}

/// Space-separated points in dimension-0 order.
impl<P: RangePoint + fmt::Display> fmt::Display for RangeTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.root.values().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
