// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-dimension preprocessing: sort points and group equal positions.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::point::RangePoint;
use crate::types::eq;

/// All points sharing one position on the dimension being indexed.
#[derive(Clone, Debug)]
pub(crate) struct Bucket<P: RangePoint> {
    pub(crate) position: P::Position,
    pub(crate) values: Vec<P>,
    /// Index range of `values` within the sorted point sequence.
    pub(crate) span: Range<usize>,
}

/// Sort `points` by their position on `dimension` and group equal positions.
///
/// The result is strictly ascending by position. The sort is stable, so points
/// within a bucket keep the order they were supplied in.
pub(crate) fn preprocess<P: RangePoint>(mut points: Vec<P>, dimension: usize) -> Vec<Bucket<P>> {
    points.sort_by(|a, b| {
        a.position_in(dimension)
            .partial_cmp(&b.position_in(dimension))
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut buckets: Vec<Bucket<P>> = Vec::new();
    for (i, value) in points.into_iter().enumerate() {
        let position = value.position_in(dimension);
        match buckets.last_mut() {
            Some(last) if eq(last.position, position) => {
                last.values.push(value);
                last.span.end = i + 1;
            }
            _ => buckets.push(Bucket {
                position,
                values: vec![value],
                span: i..i + 1,
            }),
        }
    }
    buckets
}

/// Concatenate the values of a contiguous run of buckets, in order.
pub(crate) fn gather<P: RangePoint>(buckets: &[Bucket<P>]) -> Vec<P> {
    let count = match (buckets.first(), buckets.last()) {
        (Some(first), Some(last)) => last.span.end - first.span.start,
        _ => 0,
    };
    let mut out = Vec::with_capacity(count);
    for bucket in buckets {
        out.extend(bucket.values.iter().cloned());
    }
    out
}
