// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch construction: balanced split by bucket count, wrapped in sentinels.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::bucket::{Bucket, gather, preprocess};
use crate::node::{Node, next_tree};
use crate::point::RangePoint;

impl<P: RangePoint> Node<P> {
    /// Build a sentinel-bounded tree over `values` on `dimension`, nesting a
    /// tree for every following dimension at each node.
    pub(crate) fn build(values: Vec<P>, dimension: usize) -> Self {
        let buckets = preprocess(values, dimension);
        if buckets.is_empty() {
            return Self::empty(dimension);
        }
        Self::from_buckets(&buckets, dimension, true, true)
    }

    /// Split `buckets` at the midpoint by count (not by spatial median).
    ///
    /// `wrap_min`/`wrap_max` mark the runs holding the overall leftmost and
    /// rightmost leaf; those leaves get a sentinel sibling.
    fn from_buckets(
        buckets: &[Bucket<P>],
        dimension: usize,
        wrap_min: bool,
        wrap_max: bool,
    ) -> Self {
        match buckets {
            [] => Self::empty(dimension),
            [bucket] => {
                let leaf = Self::leaf(bucket.position, bucket.values.clone(), dimension);
                Self::wrap(leaf, wrap_min, wrap_max)
            }
            _ => {
                let (lo, hi) = buckets.split_at(buckets.len() / 2);
                let left = Self::from_buckets(lo, dimension, wrap_min, false);
                let right = Self::from_buckets(hi, dimension, false, wrap_max);
                let left_max = lo.last().map(|b| b.position);
                let right_min = hi.first().map(|b| b.position);
                let next = next_tree(dimension, || gather(buckets));
                Self::internal(Arc::new(left), Arc::new(right), left_max, right_min, next)
            }
        }
    }

    /// Put sentinels beside an extreme leaf. The wrapping nodes hold the same
    /// points as the leaf, so they share its next-dimension tree.
    fn wrap(leaf: Self, wrap_min: bool, wrap_max: bool) -> Self {
        let Self::Leaf { position, .. } = &leaf else {
            return leaf;
        };
        let position = *position;
        let next = leaf.next_dimension().cloned();
        let mut node = leaf;
        if wrap_min {
            node = Self::internal(
                Arc::new(Self::MinSentinel),
                Arc::new(node),
                None,
                Some(position),
                next.clone(),
            );
        }
        if wrap_max {
            node = Self::internal(
                Arc::new(node),
                Arc::new(Self::MaxSentinel),
                Some(position),
                None,
                next,
            );
        }
        node
    }
}
