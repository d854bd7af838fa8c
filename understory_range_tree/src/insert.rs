// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent single-point insertion.

use alloc::sync::Arc;
use alloc::vec;

use crate::node::{Node, next_tree};
use crate::point::RangePoint;
use crate::types::{eq, ge_limit, le_limit, lt};

impl<P: RangePoint> Node<P> {
    /// Return a new tree holding every point of `self` plus `value`.
    ///
    /// `self` is left untouched. Only nodes on the path to the insertion point
    /// are allocated anew; all other subtrees are shared. The tree is never
    /// rebalanced, so skewed insertion sequences grow its height.
    pub(crate) fn insert(self: &Arc<Self>, value: P, dimension: usize) -> Self {
        let position = value.position_in(dimension);
        match &**self {
            Self::MinSentinel => {
                let leaf = Arc::new(Self::leaf(position, vec![value], dimension));
                let next = leaf.next_dimension().cloned();
                Self::internal(Arc::clone(self), leaf, None, Some(position), next)
            }
            Self::MaxSentinel => {
                let leaf = Arc::new(Self::leaf(position, vec![value], dimension));
                let next = leaf.next_dimension().cloned();
                Self::internal(leaf, Arc::clone(self), Some(position), None, next)
            }
            Self::Leaf {
                position: existing,
                values,
                ..
            } => {
                if eq(position, *existing) {
                    let mut values = values.clone();
                    values.push(value);
                    return Self::leaf(*existing, values, dimension);
                }
                let next = next_tree(dimension, || {
                    let mut all = values.clone();
                    all.push(value.clone());
                    all
                });
                let fresh = Arc::new(Self::leaf(position, vec![value], dimension));
                if lt(position, *existing) {
                    Self::internal(
                        fresh,
                        Arc::clone(self),
                        Some(position),
                        Some(*existing),
                        next,
                    )
                } else {
                    Self::internal(
                        Arc::clone(self),
                        fresh,
                        Some(*existing),
                        Some(position),
                        next,
                    )
                }
            }
            Self::Internal {
                left,
                right,
                left_max,
                right_min,
                ..
            } => {
                let next = next_tree(dimension, || {
                    let mut all = self.values();
                    all.push(value.clone());
                    all
                });
                if le_limit(position, *left_max) {
                    let left = Arc::new(left.insert(value, dimension));
                    Self::internal(left, Arc::clone(right), *left_max, *right_min, next)
                } else if ge_limit(position, *right_min) {
                    let right = Arc::new(right.insert(value, dimension));
                    Self::internal(Arc::clone(left), right, *left_max, *right_min, next)
                } else {
                    // Strictly between the two subtrees (or beside a sentinel):
                    // the left subtree takes it and its maximum widens.
                    let left = Arc::new(left.insert(value, dimension));
                    Self::internal(left, Arc::clone(right), Some(position), *right_min, next)
                }
            }
        }
    }
}
