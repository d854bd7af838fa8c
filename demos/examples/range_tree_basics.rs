// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range tree basics.
//!
//! Build a 1D tree, query an interval, insert and remove a value.
//!
//! Run:
//! - `cargo run -p understory_range_tree_demos --example range_tree_basics`

use understory_range_tree::{Interval, RangeTree};

fn main() {
    let mut tree = RangeTree::new([8.0, 1.0, 10.0, 4.0, 2.0, 7.0, 5.0, 3.0, 9.0, 6.0]);
    println!("tree: {tree}");

    let range = [Interval::new(3.0, 6.0)];
    let hits = tree.values_in_range(&range).unwrap();
    println!("in [3, 6]: {hits:?}");
    assert_eq!(hits, [3.0, 4.0, 5.0, 6.0]);

    // Insert between existing leaves; the query picks it up in order.
    tree.insert(4.5);
    let hits = tree.values_in_range(&range).unwrap();
    println!("after inserting 4.5: {hits:?}");
    assert_eq!(hits, [3.0, 4.0, 4.5, 5.0, 6.0]);

    assert!(tree.remove(&4.0));
    assert!(!tree.remove(&42.0), "absent values are not removed");
    println!("after removing 4: {tree} ({} points)", tree.len());
}
