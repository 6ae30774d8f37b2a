// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by tree construction and the persistent write operations.

use thiserror::Error;

/// Errors returned by [`Tree`](crate::Tree) construction and writes.
///
/// All operations are deterministic pure functions; there is nothing to
/// retry, and the first failure is the only outcome to report.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// The domain dimensions at build time were not strictly positive.
    #[error("tree dimensions {width}x{height} must both be > 0")]
    InvalidDimensions {
        /// Requested domain width.
        width: f64,
        /// Requested domain height.
        height: f64,
    },

    /// An inserted point was not contained by the region it targeted.
    ///
    /// Out-of-bounds points fail loudly rather than being dropped, since a
    /// silent drop would corrupt caller expectations about point counts.
    #[error("point ({x}, {y}) lies outside the target region")]
    PointOutOfBounds {
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
    },

    /// Splitting reached [`MAX_DEPTH`](crate::MAX_DEPTH) subdivision levels
    /// without separating the entries involved.
    ///
    /// With a leaf capacity of 1, coincident points can never be separated
    /// by quartering; the depth cap turns that unbounded recursion into an
    /// error.
    #[error("exceeded {} subdivision levels; entries cannot be separated", crate::MAX_DEPTH)]
    MaxDepthReached,

    /// A branch accepted a point that none of its children contain.
    ///
    /// The four children of a branch tile its region by construction, so
    /// this indicates a defect in quartering rather than bad input.
    #[error("no child quadrant contains point ({x}, {y})")]
    ChildrenDoNotTile {
        /// Orphaned x coordinate.
        x: f64,
        /// Orphaned y coordinate.
        y: f64,
    },
}
