// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural invariant checks, run by unit tests after every mutation.

use alloc::vec::Vec;

use crate::node::{Node, has_next_dimension};
use crate::point::RangePoint;
use crate::types::{eq, lt};

impl<P: RangePoint + PartialEq> Node<P> {
    /// Assert every structural invariant of a root-level tree on `dimension`,
    /// recursing into all next-dimension trees.
    pub(crate) fn check_invariants(&self, dimension: usize) {
        let mut node = self;
        while let Self::Internal { left, .. } = node {
            node = left;
        }
        assert!(
            matches!(node, Self::MinSentinel),
            "dimension {dimension}: leftmost node must be the min sentinel"
        );
        let mut node = self;
        while let Self::Internal { right, .. } = node {
            node = right;
        }
        assert!(
            matches!(node, Self::MaxSentinel),
            "dimension {dimension}: rightmost node must be the max sentinel"
        );
        self.check_subtree(dimension);
    }

    fn check_subtree(&self, dimension: usize) {
        match self {
            Self::MinSentinel | Self::MaxSentinel => {}
            Self::Leaf {
                position, values, ..
            } => {
                assert!(!values.is_empty(), "leaves hold at least one point");
                for v in values {
                    assert!(
                        eq(v.position_in(dimension), *position),
                        "leaf at {position:?} holds a point at {:?}",
                        v.position_in(dimension)
                    );
                }
            }
            Self::Internal {
                left,
                right,
                left_max,
                right_min,
                weight,
                ..
            } => {
                assert_eq!(*left_max, left.max_position(), "left limit is exact");
                assert_eq!(*right_min, right.min_position(), "right limit is exact");
                if let (Some(a), Some(b)) = (left_max, right_min) {
                    assert!(lt(*a, *b), "limits are ordered: {a:?} < {b:?}");
                }
                assert_eq!(*weight, left.weight() + right.weight(), "weight is consistent");
                left.check_subtree(dimension);
                right.check_subtree(dimension);
            }
        }
        self.check_next_dimension(dimension);
    }

    fn check_next_dimension(&self, dimension: usize) {
        if matches!(self, Self::MinSentinel | Self::MaxSentinel) {
            return;
        }
        let Some(next) = self.next_dimension() else {
            assert!(
                !has_next_dimension::<P>(dimension),
                "dimension {dimension}: missing next-dimension tree"
            );
            return;
        };
        assert!(
            has_next_dimension::<P>(dimension),
            "dimension {dimension}: unexpected next-dimension tree on the last dimension"
        );
        assert!(
            same_multiset(&self.values(), &next.values()),
            "dimension {dimension}: next-dimension tree indexes different points"
        );
        next.check_invariants(dimension + 1);
    }
}

fn same_multiset<P: PartialEq>(a: &[P], b: &[P]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used: Vec<bool> = alloc::vec![false; b.len()];
    a.iter().all(|x| {
        let found = b
            .iter()
            .enumerate()
            .position(|(i, y)| !used[i] && x == y);
        match found {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}
