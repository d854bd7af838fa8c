// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent tree nodes, one tree per dimension, nested through `next`.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::point::RangePoint;

/// A node of the range tree for one dimension.
///
/// Nodes are immutable once built. Children and next-dimension trees are held
/// behind `Arc` so that mutation can share every subtree off the affected path.
#[derive(Debug)]
pub(crate) enum Node<P: RangePoint> {
    /// −∞ boundary. Only ever the leftmost node of a root-level tree.
    MinSentinel,
    /// +∞ boundary. Only ever the rightmost node of a root-level tree.
    MaxSentinel,
    /// Every point sharing `position` on this dimension.
    Leaf {
        position: P::Position,
        values: Vec<P>,
        /// Tree over `values` on the next dimension; `None` on the last dimension.
        next: Option<Arc<Self>>,
    },
    Internal {
        left: Arc<Self>,
        right: Arc<Self>,
        /// Greatest position under `left`, `None` if `left` holds no leaf.
        left_max: Option<P::Position>,
        /// Smallest position under `right`, `None` if `right` holds no leaf.
        right_min: Option<P::Position>,
        /// Leaves and sentinels below this node. Informational only.
        weight: usize,
        /// Tree over every point below this node on the next dimension.
        next: Option<Arc<Self>>,
    },
}

/// Whether trees on `dimension` carry a next-dimension tree.
#[inline]
pub(crate) fn has_next_dimension<P: RangePoint>(dimension: usize) -> bool {
    dimension + 1 < P::DIMENSIONS
}

/// Build the next-dimension tree for a node on `dimension`, if there is one.
///
/// `values` is only evaluated when a next dimension exists.
pub(crate) fn next_tree<P: RangePoint>(
    dimension: usize,
    values: impl FnOnce() -> Vec<P>,
) -> Option<Arc<Node<P>>> {
    has_next_dimension::<P>(dimension).then(|| Arc::new(Node::build(values(), dimension + 1)))
}

impl<P: RangePoint> Node<P> {
    /// The tree of an empty point set on `dimension`.
    pub(crate) fn empty(dimension: usize) -> Self {
        Self::Internal {
            left: Arc::new(Self::MinSentinel),
            right: Arc::new(Self::MaxSentinel),
            left_max: None,
            right_min: None,
            weight: 2,
            next: next_tree(dimension, Vec::new),
        }
    }

    /// A leaf on `dimension`, with its next-dimension tree built from `values`.
    pub(crate) fn leaf(position: P::Position, values: Vec<P>, dimension: usize) -> Self {
        let next = next_tree(dimension, || values.clone());
        Self::Leaf {
            position,
            values,
            next,
        }
    }

    /// An internal node; the weight is derived from the children.
    pub(crate) fn internal(
        left: Arc<Self>,
        right: Arc<Self>,
        left_max: Option<P::Position>,
        right_min: Option<P::Position>,
        next: Option<Arc<Self>>,
    ) -> Self {
        let weight = left.weight() + right.weight();
        Self::Internal {
            left,
            right,
            left_max,
            right_min,
            weight,
            next,
        }
    }

    /// Join two subtrees under a new internal node on `dimension`.
    ///
    /// Limits are taken from the children's extreme positions and the
    /// next-dimension tree is rebuilt from all of their values.
    pub(crate) fn joined(left: Arc<Self>, right: Arc<Self>, dimension: usize) -> Self {
        let left_max = left.max_position();
        let right_min = right.min_position();
        let next = next_tree(dimension, || {
            let mut values = left.values();
            right.collect_values(&mut values);
            values
        });
        Self::internal(left, right, left_max, right_min, next)
    }

    pub(crate) fn weight(&self) -> usize {
        match self {
            Self::MinSentinel | Self::MaxSentinel | Self::Leaf { .. } => 1,
            Self::Internal { weight, .. } => *weight,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    pub(crate) fn next_dimension(&self) -> Option<&Arc<Self>> {
        match self {
            Self::MinSentinel | Self::MaxSentinel => None,
            Self::Leaf { next, .. } | Self::Internal { next, .. } => next.as_ref(),
        }
    }

    /// Every point below this node, in ascending position order.
    pub(crate) fn values(&self) -> Vec<P> {
        let mut out = Vec::new();
        self.collect_values(&mut out);
        out
    }

    pub(crate) fn collect_values(&self, out: &mut Vec<P>) {
        match self {
            Self::MinSentinel | Self::MaxSentinel => {}
            Self::Leaf { values, .. } => out.extend(values.iter().cloned()),
            Self::Internal { left, right, .. } => {
                left.collect_values(out);
                right.collect_values(out);
            }
        }
    }

    /// Number of points below this node.
    pub(crate) fn count(&self) -> usize {
        match self {
            Self::MinSentinel | Self::MaxSentinel => 0,
            Self::Leaf { values, .. } => values.len(),
            Self::Internal { left, right, .. } => left.count() + right.count(),
        }
    }

    /// Smallest leaf position below this node.
    pub(crate) fn min_position(&self) -> Option<P::Position> {
        match self {
            Self::MinSentinel | Self::MaxSentinel => None,
            Self::Leaf { position, .. } => Some(*position),
            Self::Internal { left, right, .. } => {
                left.min_position().or_else(|| right.min_position())
            }
        }
    }

    /// Greatest leaf position below this node.
    pub(crate) fn max_position(&self) -> Option<P::Position> {
        match self {
            Self::MinSentinel | Self::MaxSentinel => None,
            Self::Leaf { position, .. } => Some(*position),
            Self::Internal { left, right, .. } => {
                right.max_position().or_else(|| left.max_position())
            }
        }
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub(crate) fn height(&self) -> usize {
        match self {
            Self::MinSentinel | Self::MaxSentinel | Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}
