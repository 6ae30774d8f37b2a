// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Quadtree: a Kurbo-native, persistent point-region quadtree.
//!
//! Canopy Quadtree is a reusable spatial index for animated point sets:
//! renderers, canvas demos, and simulations that move every point each tick.
//!
//! - Partitions a `[0, 0]..[width, height]` domain into nested quarters so
//!   point insertion and bulk repositioning stay sub-linear.
//! - Every write returns a new [`Tree`] value; unchanged subtrees are shared
//!   between versions, so previously published trees stay valid and readable.
//! - Leaves hold at most [`LEAF_CAPACITY`] entries; an overfull leaf splits
//!   into four quarters, and [`Tree::update`] merges underfull branches back.
//! - Traverse with [`Quadrant::fold`] and [`Quadrant::map`], or the
//!   [`Quadrant::depth_first`] / [`Quadrant::breadth_first`] iterators.
//!
//! A rendering collaborator builds a tree once, then on each animation tick
//! calls [`Tree::update`] with a per-entry transform and redraws the returned
//! tree from the read accessors ([`Quadrant::region`], [`Quadrant::points`],
//! [`Quadrant::children`]). It never mutates tree values directly.
//!
//! # Example
//!
//! ```rust
//! use canopy_quadtree::{Entry, Tree};
//!
//! // Build a tree and add a point.
//! let tree = Tree::build(200.0, 200.0, [Entry::at(50.0, 50.0), Entry::at(150.0, 75.0)])?;
//! let grown = tree.insert(Entry::at(25.0, 125.0))?;
//!
//! // Writes are persistent: the receiver is untouched.
//! assert_eq!((tree.len(), grown.len()), (2, 3));
//! # Ok::<(), canopy_quadtree::Error>(())
//! ```
//!
//! Bulk relocation re-homes entries that cross quadrant boundaries:
//!
//! ```rust
//! use canopy_quadtree::{Entry, Tree};
//!
//! let tree = Tree::build(200.0, 200.0, [Entry::at(50.0, 50.0), Entry::at(25.0, 25.0)])?;
//! let shifted = tree.update(|mut entry| {
//!     entry.position.x += 100.0;
//!     entry
//! })?;
//!
//! // Every entry is now in a leaf that actually contains it.
//! assert!(shifted.depth_first().all(|quadrant| {
//!     quadrant.points().is_none_or(|points| {
//!         points.iter().all(|e| quadrant.region().contains(e.position))
//!     })
//! }));
//! # Ok::<(), canopy_quadtree::Error>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod geometry;
pub mod traverse;
pub mod tree;

pub use error::Error;
pub use geometry::Region;
pub use traverse::{BreadthFirst, DepthFirst};
pub use tree::{Entry, LEAF_CAPACITY, MAX_DEPTH, Quadrant, Tree};
