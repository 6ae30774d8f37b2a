// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated points.
//!
//! The rendering-collaborator pattern: entries carry velocity payloads, each
//! tick applies one `update` that advances every point and bounces it off
//! the domain walls, and the resulting tree is drawn from the read accessors
//! as coarse ASCII.
//!
//! Run:
//! - `cargo run -p canopy_examples --example animated_points`

use canopy_quadtree::{Entry, Tree};
use kurbo::{Point, Vec2};

const WIDTH: f64 = 120.0;
const HEIGHT: f64 = 60.0;
const TICKS: usize = 6;

fn main() -> Result<(), canopy_quadtree::Error> {
    let seeds = [
        (Point::new(30.0, 15.0), Vec2::new(7.0, 3.0)),
        (Point::new(90.0, 45.0), Vec2::new(-5.0, 2.0)),
        (Point::new(60.0, 20.0), Vec2::new(4.0, -6.0)),
        (Point::new(15.0, 50.0), Vec2::new(6.0, -2.0)),
        (Point::new(105.0, 10.0), Vec2::new(-8.0, 5.0)),
    ];
    let mut tree = Tree::build(
        WIDTH,
        HEIGHT,
        seeds.map(|(position, velocity)| Entry::new(position, velocity)),
    )?;

    for tick in 0..TICKS {
        println!("tick {tick} ({} entries)", tree.len());
        render(&tree);

        // Advance every entry, flipping its velocity at the walls. The tree
        // re-homes whatever crosses a quadrant boundary and merges emptied
        // branches afterwards.
        tree = tree.update(|mut entry| {
            let mut next = entry.position + entry.payload;
            if !(0.0..=WIDTH).contains(&next.x) {
                entry.payload.x = -entry.payload.x;
                next.x = next.x.clamp(0.0, WIDTH);
            }
            if !(0.0..=HEIGHT).contains(&next.y) {
                entry.payload.y = -entry.payload.y;
                next.y = next.y.clamp(0.0, HEIGHT);
            }
            entry.position = next;
            entry
        })?;
    }
    Ok(())
}

/// Draw leaf outlines and entries on a character grid.
fn render(tree: &Tree<Vec2>) {
    const COLS: usize = 60;
    const ROWS: usize = 20;

    let col = |x: f64| ((x / WIDTH * COLS as f64).round() as usize).min(COLS);
    let row = |y: f64| ((y / HEIGHT * ROWS as f64).round() as usize).min(ROWS);

    let mut grid = vec![vec![' '; COLS + 1]; ROWS + 1];
    for quadrant in tree.depth_first().filter(|q| q.is_leaf()) {
        let region = quadrant.region();
        let (c0, c1) = (col(region.nw.x), col(region.se.x));
        let (r0, r1) = (row(region.nw.y), row(region.se.y));
        for c in c0..=c1 {
            grid[r0][c] = '-';
            grid[r1][c] = '-';
        }
        for r in r0..=r1 {
            grid[r][c0] = '|';
            grid[r][c1] = '|';
        }
        for (r, c) in [(r0, c0), (r0, c1), (r1, c0), (r1, c1)] {
            grid[r][c] = '+';
        }
    }
    for entry in tree.entries() {
        grid[row(entry.position.y)][col(entry.position.x)] = '*';
    }
    for line in &grid {
        println!("{}", line.iter().collect::<String>());
    }
}
