// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner-addressed regions and quartering.

use kurbo::{Point, Size, Vec2};

/// Axis-aligned rectangle addressed by its north-west and south-east corners.
///
/// Containment is inclusive on all four edges, unlike [`kurbo::Rect`], which
/// is half-open. Inclusive edges let the quarters of a region tile it with
/// no gap: a point exactly on an interior split line matches more than one
/// quarter and is routed by the fixed child scan order.
///
/// [`Region::size`] is well defined for corners supplied in either order;
/// [`Region::contains`] assumes `nw` is the componentwise smaller corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    /// North-west corner.
    pub nw: Point,
    /// South-east corner.
    pub se: Point,
}

impl Region {
    /// Create a region from its two corners.
    pub const fn new(nw: Point, se: Point) -> Self {
        Self { nw, se }
    }

    /// Region covering `[0, 0]..[width, height]`.
    pub const fn from_origin(width: f64, height: f64) -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(width, height))
    }

    /// Width and height as absolute corner deltas.
    ///
    /// Valid for corners supplied in any order, including degenerate regions.
    pub fn size(&self) -> Size {
        Size::new((self.se.x - self.nw.x).abs(), (self.se.y - self.nw.y).abs())
    }

    /// Whether `p` lies inside the region, inclusive on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        self.nw.x <= p.x && p.x <= self.se.x && self.nw.y <= p.y && p.y <= self.se.y
    }

    /// Split into four equal quarters, in `[TL, TR, BR, BL]` order.
    ///
    /// The top-left quarter keeps `nw` and the bottom-right keeps `se`; the
    /// remaining corners are offset by half the region's extent. The four
    /// quarters tile `self` exactly.
    pub fn quarters(&self) -> [Self; 4] {
        let half = self.size().to_vec2() / 2.0;
        [
            Self::new(self.nw, self.se + Vec2::new(-half.x, -half.y)),
            Self::new(self.nw + Vec2::new(half.x, 0.0), self.se + Vec2::new(0.0, -half.y)),
            Self::new(self.nw + half, self.se),
            Self::new(self.nw + Vec2::new(0.0, half.y), self.se + Vec2::new(-half.x, 0.0)),
        ]
    }
}
