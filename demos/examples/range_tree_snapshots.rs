// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range tree snapshots.
//!
//! Clone a tree as a snapshot, keep mutating the original, and query both.
//! Clones share every subtree that later mutations do not touch.
//!
//! Run:
//! - `cargo run -p understory_range_tree_demos --example range_tree_snapshots`

use understory_range_tree::{Interval, RangeTree};

fn main() {
    let mut tree: RangeTree<[i32; 3]> = (0..50).map(|i| [i, i % 7, i % 5]).collect();
    let ranges = [
        Interval::new(10, 30),
        Interval::new(0, 3),
        Interval::new(2, 4),
    ];

    let snapshot = tree.clone();
    for i in 10..20 {
        tree.insert([i, 1, 3]);
    }
    assert!(tree.remove(&[10, 3, 0]));

    let before = snapshot.values_in_range(&ranges).unwrap().len();
    let after = tree.values_in_range(&ranges).unwrap().len();
    println!("snapshot: {before} hits of {} points", snapshot.len());
    println!("current:  {after} hits of {} points", tree.len());
    println!("current height {} (insertions do not rebalance)", tree.height());
    assert_eq!(after, before + 10);
}
