// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orthogonal range queries by canonical-subtree decomposition.
//!
//! On each dimension the query walks two root-to-leaf paths: towards the
//! predecessor of the interval's lower bound and towards the successor of its
//! upper bound. Below the node where the paths part (the split node), every
//! subtree hanging off the inner side of either path lies entirely within the
//! interval. Those canonical subtrees either report their points directly (last
//! dimension) or forward the remaining intervals to their next-dimension tree.

use alloc::vec::Vec;

use crate::node::Node;
use crate::point::RangePoint;
use crate::types::{Interval, gt_limit, lt_limit};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl<P: RangePoint> Node<P> {
    /// Append to `out` every point below this node lying within `ranges`.
    ///
    /// `ranges[0]` applies to this node's dimension, the rest to the following
    /// dimensions in order. Canonical subtrees are visited in ascending position
    /// order on this dimension.
    pub(crate) fn query(&self, ranges: &[Interval<P::Position>], out: &mut Vec<P>) {
        let Some((range, rest)) = ranges.split_first() else {
            return;
        };
        if range.is_empty() {
            return;
        }
        if !matches!(self, Self::Internal { .. }) {
            self.report(range, rest, out);
            return;
        }

        let predecessor = self.path_to_predecessor(range.min);
        let successor = self.path_to_successor(range.max);
        let common = predecessor
            .iter()
            .zip(&successor)
            .take_while(|(a, b)| a == b)
            .count();
        let split = self.node_at(&predecessor[..common]);

        let diverged = common < predecessor.len() && common < successor.len();
        let Self::Internal { left, right, .. } = split else {
            // Both paths end on the same leaf or sentinel.
            split.report(range, rest, out);
            return;
        };
        debug_assert!(diverged, "paths ending below an internal node must part");
        debug_assert_eq!(
            (predecessor[common], successor[common]),
            (Direction::Left, Direction::Right),
            "a non-empty interval splits left then right"
        );

        let mut canonical: Vec<&Self> = Vec::new();
        if left.is_leaf() {
            canonical.push(left);
        }
        left.right_of_path(&predecessor[common + 1..], &mut canonical);
        right.left_of_path(&successor[common + 1..], &mut canonical);
        if right.is_leaf() {
            canonical.push(right);
        }
        for node in canonical {
            node.report(range, rest, out);
        }
    }

    /// Contribute a node whose subtree is known to lie within `range`, except
    /// for a leaf, whose own position is checked here.
    fn report(
        &self,
        range: &Interval<P::Position>,
        rest: &[Interval<P::Position>],
        out: &mut Vec<P>,
    ) {
        match self {
            Self::MinSentinel | Self::MaxSentinel => {}
            Self::Leaf { position, .. } if !range.contains(*position) => {}
            _ if rest.is_empty() => self.collect_values(out),
            _ => match self.next_dimension() {
                Some(next) => next.query(rest, out),
                None => unreachable!("a node before the last dimension has no next-dimension tree"),
            },
        }
    }

    /// Path to the last leaf strictly before `needle` (or to the min sentinel).
    fn path_to_predecessor(&self, needle: P::Position) -> Vec<Direction> {
        let mut path = Vec::new();
        let mut node = self;
        while let Self::Internal {
            left,
            right,
            right_min,
            ..
        } = node
        {
            if gt_limit(needle, *right_min) {
                path.push(Direction::Right);
                node = right;
            } else {
                path.push(Direction::Left);
                node = left;
            }
        }
        path
    }

    /// Path to the first leaf strictly after `needle` (or to the max sentinel).
    fn path_to_successor(&self, needle: P::Position) -> Vec<Direction> {
        let mut path = Vec::new();
        let mut node = self;
        while let Self::Internal {
            left,
            right,
            left_max,
            ..
        } = node
        {
            if lt_limit(needle, *left_max) {
                path.push(Direction::Left);
                node = left;
            } else {
                path.push(Direction::Right);
                node = right;
            }
        }
        path
    }

    fn node_at(&self, path: &[Direction]) -> &Self {
        let mut node = self;
        for step in path {
            let Self::Internal { left, right, .. } = node else {
                unreachable!("path continues below a leaf or sentinel");
            };
            node = match step {
                Direction::Left => left,
                Direction::Right => right,
            };
        }
        node
    }

    /// Collect the right siblings of every left step of `path`, deepest first.
    fn right_of_path<'a>(&'a self, path: &[Direction], out: &mut Vec<&'a Self>) {
        let Some((step, rest)) = path.split_first() else {
            return;
        };
        let Self::Internal { left, right, .. } = self else {
            unreachable!("path continues below a leaf or sentinel");
        };
        match step {
            Direction::Left => {
                left.right_of_path(rest, out);
                out.push(right);
            }
            Direction::Right => right.right_of_path(rest, out),
        }
    }

    /// Collect the left siblings of every right step of `path`, shallowest first.
    fn left_of_path<'a>(&'a self, path: &[Direction], out: &mut Vec<&'a Self>) {
        let Some((step, rest)) = path.split_first() else {
            return;
        };
        let Self::Internal { left, right, .. } = self else {
            unreachable!("path continues below a leaf or sentinel");
        };
        match step {
            Direction::Left => left.left_of_path(rest, out),
            Direction::Right => {
                out.push(left);
                right.left_of_path(rest, out);
            }
        }
    }
}
