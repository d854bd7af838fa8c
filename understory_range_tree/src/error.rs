// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by [`RangeTree`](crate::RangeTree) queries.

/// Error returned by [`RangeTree::values_in_range`](crate::RangeTree::values_in_range).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The number of intervals does not match the point type's dimension count.
    #[error("expected one interval per dimension ({expected}), got {found}")]
    DimensionMismatch {
        /// Dimensions of the point type.
        expected: usize,
        /// Intervals supplied.
        found: usize,
    },
}
