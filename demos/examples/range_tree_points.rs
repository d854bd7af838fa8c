// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range tree over `kurbo::Point`.
//!
//! Index a scatter of points and select those inside a rectangle. Set
//! `RUST_LOG=understory_range_tree=trace` to see the tree's tracing events.
//!
//! Run:
//! - `cargo run -p understory_range_tree_demos --example range_tree_points`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_range_tree::{Interval, RangeTree};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree: RangeTree<Point> = (0..20)
        .map(|i| {
            let t = f64::from(i);
            Point::new(t * 5.0, (t * 37.0) % 100.0)
        })
        .collect();
    tree.insert(Point::new(42.0, 42.0));

    let rect = Rect::new(20.0, 20.0, 60.0, 80.0);
    let hits = tree
        .values_in_range(&[
            Interval::new(rect.x0, rect.x1),
            Interval::new(rect.y0, rect.y1),
        ])
        .unwrap();
    println!("{} of {} points inside {rect:?}", hits.len(), tree.len());
    for p in &hits {
        println!("  {p:?}");
        assert!(rect.contains(*p) || p.x == rect.x1 || p.y == rect.y1);
    }

    if let Err(err) = tree.values_in_range(&[Interval::new(0.0, 1.0)]) {
        println!("one interval for a 2D tree: {err}");
    }
}
