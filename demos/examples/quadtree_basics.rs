// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small tree, insert a point persistently, and walk the structure.
//!
//! Run:
//! - `cargo run -p canopy_examples --example quadtree_basics`

use canopy_quadtree::{Entry, Tree};

fn main() -> Result<(), canopy_quadtree::Error> {
    // The demo point list from the original visualization.
    let points = [
        Entry::at(100.0, 100.0),
        Entry::at(50.0, 50.0),
        Entry::at(25.0, 25.0),
        Entry::at(300.0, 300.0),
    ];
    let tree = Tree::build(500.0, 500.0, points)?;

    // Persistent insert: the first tree is intact afterwards.
    let grown = tree.insert(Entry::at(400.0, 120.0))?;
    println!("before: {} entries, after: {}", tree.len(), grown.len());

    // Walk the structure depth-first.
    for (i, quadrant) in grown.depth_first().enumerate() {
        let region = quadrant.region();
        let kind = if quadrant.is_leaf() { "leaf  " } else { "branch" };
        println!(
            "{i:2}: {kind} [{:>3.0},{:>3.0}]..[{:>3.0},{:>3.0}] holding {}",
            region.nw.x,
            region.nw.y,
            region.se.x,
            region.se.y,
            quadrant.points().map_or(0, <[_]>::len),
        );
    }

    // Level order visits the same set of nodes.
    assert_eq!(grown.depth_first().count(), grown.breadth_first().count());
    Ok(())
}
