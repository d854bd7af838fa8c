// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range_tree --heading-base-level=0

//! Understory Range Tree: a persistent multidimensional range tree.
//!
//! A [`RangeTree`] indexes points with any fixed number of dimensions and answers
//! orthogonal range queries: "every point whose coordinate on each dimension lies within
//! the given inclusive interval".
//!
//! - Batch-build a balanced tree with [`RangeTree::new`] or [`FromIterator`].
//! - Insert and remove single points; each mutation returns a new version that shares
//!   all untouched subtrees with the previous one, so [`Clone`] is a cheap snapshot.
//! - Query with one [`Interval`] per dimension through [`RangeTree::values_in_range`].
//!
//! Points describe themselves through the [`RangePoint`] trait. It is implemented for
//! scalars (1D), `[T; N]` arrays, homogeneous pairs `(T, T)`, and, with the `kurbo`
//! feature, `kurbo::Point`.
//!
//! # Example
//!
//! ```rust
//! use understory_range_tree::{Interval, RangeTree};
//!
//! let mut tree = RangeTree::new([(8, 6), (1, 9), (10, 3), (4, 5), (2, 7), (7, 2)]);
//! let snapshot = tree.clone();
//!
//! tree.insert((3, 6));
//! let mut hits = tree
//!     .values_in_range(&[Interval::new(1, 3), Interval::new(5, 8)])
//!     .unwrap();
//! hits.sort();
//! assert_eq!(hits, vec![(2, 7), (3, 6)]);
//!
//! // The snapshot still sees the tree as it was.
//! assert_eq!(snapshot.len(), 6);
//! ```
//!
//! ## Structure
//!
//! The tree on dimension 0 stores points at its leaves, grouped by position. Every node
//! also owns a complete tree over its points on the next dimension, down to the last one.
//! A query decomposes each interval into O(log n) canonical subtrees and drills into their
//! next-dimension trees, for O(log^d n + k) total work on a balanced tree.
//!
//! Insertion never rebalances. Long sorted insertion runs degrade the height of the tree;
//! rebuild with [`RangeTree::new`] when that matters.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates.
//!
//! ## Logging
//!
//! Build, insert, remove and query emit `tracing` events at `debug` and `trace` level.

#![no_std]

extern crate alloc;

mod bucket;
mod build;
mod insert;
#[cfg(test)]
mod invariants;
mod node;
mod query;
mod remove;
mod tree;

pub mod error;
pub mod point;
pub mod types;

pub use error::QueryError;
pub use point::RangePoint;
pub use tree::RangeTree;
pub use types::Interval;
