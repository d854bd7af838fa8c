// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point abstraction: how a value exposes its coordinates to the tree.

use core::fmt::Debug;

/// A value that can be stored in a [`RangeTree`](crate::RangeTree).
///
/// A point type has a fixed number of dimensions and projects to one scalar
/// [`Position`](Self::Position) per dimension. Positions are compared with
/// [`PartialOrd`] and are assumed to be totally ordered (no NaN for floats).
///
/// Adapters are provided for 1D scalars, for `[T; N]` arrays, for homogeneous
/// pairs `(T, T)` and, with the `kurbo` feature, for `kurbo::Point`.
pub trait RangePoint: Clone {
    /// Scalar coordinate type shared by every dimension of this point type.
    type Position: Copy + PartialOrd + Debug;

    /// Number of dimensions. Must be at least 1.
    const DIMENSIONS: usize;

    /// Coordinate of this point on `dimension` (`0..DIMENSIONS`).
    fn position_in(&self, dimension: usize) -> Self::Position;
}

macro_rules! impl_scalar_point {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangePoint for $t {
                type Position = Self;

                const DIMENSIONS: usize = 1;

                #[inline]
                fn position_in(&self, _dimension: usize) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_scalar_point!(f32, f64, i32, i64, u32, u64, usize);

impl<T: Copy + PartialOrd + Debug, const N: usize> RangePoint for [T; N] {
    type Position = T;

    const DIMENSIONS: usize = N;

    #[inline]
    fn position_in(&self, dimension: usize) -> T {
        self[dimension]
    }
}

impl<T: Copy + PartialOrd + Debug> RangePoint for (T, T) {
    type Position = T;

    const DIMENSIONS: usize = 2;

    #[inline]
    fn position_in(&self, dimension: usize) -> T {
        if dimension == 0 { self.0 } else { self.1 }
    }
}

#[cfg(feature = "kurbo")]
impl RangePoint for kurbo::Point {
    type Position = f64;

    const DIMENSIONS: usize = 2;

    #[inline]
    fn position_in(&self, dimension: usize) -> f64 {
        if dimension == 0 { self.x } else { self.y }
    }
}
