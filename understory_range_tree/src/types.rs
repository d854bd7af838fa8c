// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query intervals and comparison helpers.

use core::cmp::Ordering;
use core::ops::RangeInclusive;

/// Inclusive interval `[min, max]` on one dimension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    /// Lower bound (inclusive).
    pub min: T,
    /// Upper bound (inclusive).
    pub max: T,
}

impl<T> Interval<T> {
    /// Create a new interval from its bounds.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Copy + PartialOrd> Interval<T> {
    /// Whether `position` lies within the interval, bounds included.
    pub fn contains(&self, position: T) -> bool {
        le(self.min, position) && le(position, self.max)
    }

    /// Return true if the interval is inverted (`min > max`) and so selects nothing.
    /// Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        !le(self.min, self.max)
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((min, max): (T, T)) -> Self {
        Self { min, max }
    }
}

impl<T: Copy> From<RangeInclusive<T>> for Interval<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        Self {
            min: *range.start(),
            max: *range.end(),
        }
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

pub(crate) fn eq<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b) == Some(Ordering::Equal)
}

// Subtree limits are `None` next to a sentinel. A missing limit never satisfies a
// comparison, so only the sentinel itself can absorb values beyond the known extremes.

pub(crate) fn le_limit<T: PartialOrd>(a: T, limit: Option<T>) -> bool {
    limit.is_some_and(|b| le(a, b))
}

pub(crate) fn ge_limit<T: PartialOrd>(a: T, limit: Option<T>) -> bool {
    limit.is_some_and(|b| le(b, a))
}

pub(crate) fn lt_limit<T: PartialOrd>(a: T, limit: Option<T>) -> bool {
    limit.is_some_and(|b| lt(a, b))
}

pub(crate) fn gt_limit<T: PartialOrd>(a: T, limit: Option<T>) -> bool {
    limit.is_some_and(|b| lt(b, a))
}
