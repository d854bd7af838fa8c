// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent single-point removal.

use alloc::sync::Arc;

use crate::node::Node;
use crate::point::RangePoint;
use crate::types::{eq, ge_limit, le_limit};

/// Outcome of removing a point from a subtree.
#[derive(Debug)]
pub(crate) enum Removal<P: RangePoint> {
    /// No equal point lives in the subtree; nothing changed.
    NotFound,
    /// The subtree was a leaf holding only the removed point.
    Emptied,
    /// The subtree without the removed point.
    Replaced(Arc<Node<P>>),
}

impl<P: RangePoint + PartialEq> Node<P> {
    /// Remove one point equal to `value`, returning the new subtree.
    ///
    /// Mirrors insertion: the leaf for the point's position is located on this
    /// dimension and the first equal value is dropped from it. A leaf left
    /// without values disappears and its parent collapses into the sibling.
    /// Every rebuilt ancestor gets exact limits and a fresh next-dimension tree.
    pub(crate) fn remove(self: &Arc<Self>, value: &P, dimension: usize) -> Removal<P> {
        let position = value.position_in(dimension);
        match &**self {
            Self::MinSentinel | Self::MaxSentinel => Removal::NotFound,
            Self::Leaf {
                position: existing,
                values,
                ..
            } => {
                if !eq(position, *existing) {
                    return Removal::NotFound;
                }
                let Some(index) = values.iter().position(|v| v == value) else {
                    return Removal::NotFound;
                };
                if values.len() == 1 {
                    return Removal::Emptied;
                }
                let mut values = values.clone();
                values.remove(index);
                Removal::Replaced(Arc::new(Self::leaf(*existing, values, dimension)))
            }
            Self::Internal {
                left,
                right,
                left_max,
                right_min,
                ..
            } => {
                let on_left = if le_limit(position, *left_max) {
                    true
                } else if ge_limit(position, *right_min) {
                    false
                } else {
                    return Removal::NotFound;
                };
                let (child, sibling) = if on_left { (left, right) } else { (right, left) };
                match child.remove(value, dimension) {
                    Removal::NotFound => Removal::NotFound,
                    Removal::Emptied => Removal::Replaced(Arc::clone(sibling)),
                    Removal::Replaced(child) => {
                        let (left, right) = if on_left {
                            (child, Arc::clone(sibling))
                        } else {
                            (Arc::clone(sibling), child)
                        };
                        Removal::Replaced(Arc::new(Self::joined(left, right, dimension)))
                    }
                }
            }
        }
    }
}
