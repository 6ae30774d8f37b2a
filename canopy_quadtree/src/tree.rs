// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree structure: entries, quadrants, splitting, merging, bulk relocation.

use alloc::sync::Arc;
use alloc::vec::Vec;
use kurbo::Point;

use crate::error::Error;
use crate::geometry::Region;

/// Maximum entries a leaf may hold before the next insertion forces a split.
pub const LEAF_CAPACITY: usize = 1;

/// Maximum subdivision depth before a split fails with
/// [`Error::MaxDepthReached`].
///
/// Entries closer together than the domain extent divided by `2^MAX_DEPTH`
/// (coincident entries in particular) cannot be separated by quartering;
/// inserting them fails instead of recursing unboundedly.
pub const MAX_DEPTH: usize = 32;

/// A stored point: a position plus caller data carried through every tree
/// operation untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<P> {
    /// Position inside the tree's domain.
    pub position: Point,
    /// Caller data riding along with the position.
    pub payload: P,
}

impl<P> Entry<P> {
    /// Create an entry at `position` carrying `payload`.
    pub const fn new(position: Point, payload: P) -> Self {
        Self { position, payload }
    }
}

impl Entry<()> {
    /// Bare positional entry with no payload.
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), ())
    }
}

/// A node of the quadtree: a terminal leaf of entries, or a branch of four
/// quarters in `[TL, TR, BR, BL]` order.
///
/// [`Quadrant::is_leaf`] and [`Quadrant::is_branch`] are exhaustive and
/// mutually exclusive for every reachable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Quadrant<P> {
    /// Terminal node holding at most [`LEAF_CAPACITY`] entries.
    Leaf {
        /// Region this leaf covers.
        region: Region,
        /// Entries stored directly, in insertion order.
        points: Vec<Entry<P>>,
    },
    /// Subdivided node whose four children tile `region` exactly.
    Branch {
        /// Region this branch covers.
        region: Region,
        /// Child quarters, shared structurally across tree versions.
        children: [Arc<Quadrant<P>>; 4],
    },
}

impl<P> Quadrant<P> {
    pub(crate) fn empty_leaf(region: Region) -> Self {
        Self::Leaf {
            region,
            points: Vec::new(),
        }
    }

    /// The region this quadrant covers.
    pub fn region(&self) -> Region {
        match self {
            Self::Leaf { region, .. } | Self::Branch { region, .. } => *region,
        }
    }

    /// Whether this quadrant is a terminal leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Whether this quadrant is a subdivided branch.
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// Entries stored directly in this quadrant, if it is a leaf.
    pub fn points(&self) -> Option<&[Entry<P>]> {
        match self {
            Self::Leaf { points, .. } => Some(points),
            Self::Branch { .. } => None,
        }
    }

    /// The four child quarters, if this quadrant is a branch.
    pub fn children(&self) -> Option<&[Arc<Quadrant<P>>; 4]> {
        match self {
            Self::Leaf { .. } => None,
            Self::Branch { children, .. } => Some(children),
        }
    }
}

impl<P: Clone> Quadrant<P> {
    /// All entries at or below this quadrant, flattened in `[TL, TR, BR, BL]`
    /// pre-order; entries within a leaf keep their stored order.
    pub fn entries(&self) -> Vec<Entry<P>> {
        self.fold(Vec::new(), |mut acc, quadrant| {
            if let Some(points) = quadrant.points() {
                acc.extend(points.iter().cloned());
            }
            acc
        })
    }

    /// Persistent insert: returns a quadrant with `entry` added, sharing
    /// every subtree off the descent path with `self`.
    ///
    /// `depth` is the subdivision level of `self`, with the tree root at 0.
    pub(crate) fn insert(&self, entry: Entry<P>, depth: usize) -> Result<Self, Error> {
        let region = self.region();
        if !region.contains(entry.position) {
            return Err(Error::PointOutOfBounds {
                x: entry.position.x,
                y: entry.position.y,
            });
        }
        match self {
            Self::Leaf { points, .. } => {
                if points.len() < LEAF_CAPACITY {
                    let mut points = points.clone();
                    points.push(entry);
                    Ok(Self::Leaf { region, points })
                } else {
                    // Over capacity: subdivide, redistribute the residents,
                    // then place the incoming entry. Redistribution can split
                    // further when entries crowd one quarter.
                    let mut branch = Self::split(region, depth)?;
                    for resident in points.iter().cloned() {
                        branch = branch.insert(resident, depth)?;
                    }
                    branch.insert(entry, depth)
                }
            }
            Self::Branch { children, .. } => {
                let slot = children
                    .iter()
                    .position(|child| child.region().contains(entry.position))
                    .ok_or(Error::ChildrenDoNotTile {
                        x: entry.position.x,
                        y: entry.position.y,
                    })?;
                let mut children = children.clone();
                children[slot] = Arc::new(children[slot].insert(entry, depth + 1)?);
                Ok(Self::Branch { region, children })
            }
        }
    }

    /// Subdivide `region` into a branch of four empty leaves.
    fn split(region: Region, depth: usize) -> Result<Self, Error> {
        if depth >= MAX_DEPTH {
            return Err(Error::MaxDepthReached);
        }
        let children = region.quarters().map(|quarter| Arc::new(Self::empty_leaf(quarter)));
        Ok(Self::Branch { region, children })
    }

    /// Bottom-up merge pass: collapse every branch whose four children are
    /// all leaves holding no more than [`LEAF_CAPACITY`] entries combined.
    ///
    /// Children are processed before parents, so collapses cascade upward in
    /// a single walk.
    pub(crate) fn trim(&self) -> Self {
        match self {
            Self::Leaf { .. } => self.clone(),
            Self::Branch { region, children } => {
                let children: [Arc<Self>; 4] = core::array::from_fn(|i| {
                    if children[i].is_leaf() {
                        Arc::clone(&children[i])
                    } else {
                        Arc::new(children[i].trim())
                    }
                });
                if children.iter().all(|child| child.is_leaf()) {
                    let total: usize = children
                        .iter()
                        .map(|child| child.points().map_or(0, |points| points.len()))
                        .sum();
                    if total <= LEAF_CAPACITY {
                        let merged = Self::Branch {
                            region: *region,
                            children,
                        };
                        return Self::Leaf {
                            region: *region,
                            points: merged.entries(),
                        };
                    }
                }
                Self::Branch {
                    region: *region,
                    children,
                }
            }
        }
    }
}

/// Persistent point-region quadtree over a `[0, 0]..[width, height]` domain.
///
/// Every write returns a new tree; the receiver is never modified, and
/// subtrees untouched by a write are shared between the versions. Readers of
/// a previously published tree value are therefore always safe.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<P> {
    width: f64,
    height: f64,
    root: Quadrant<P>,
}

impl<P> Tree<P> {
    /// Create an empty tree covering `[0, 0]..[width, height]`.
    ///
    /// Fails with [`Error::InvalidDimensions`] unless both dimensions are
    /// strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, Error> {
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            root: Quadrant::empty_leaf(Region::from_origin(width, height)),
        })
    }

    /// Domain width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Domain height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The root quadrant, covering the whole domain.
    pub fn root(&self) -> &Quadrant<P> {
        &self.root
    }

    /// Number of entries stored in the tree.
    pub fn len(&self) -> usize {
        self.root.fold(0, |count, quadrant| {
            count + quadrant.points().map_or(0, |points| points.len())
        })
    }

    /// Whether the tree stores no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: Clone> Tree<P> {
    /// Build a tree from a point list, inserting in input order.
    ///
    /// Input order can affect the final shape when points tie on capacity
    /// boundaries; it never affects which entries the tree holds.
    pub fn build(
        width: f64,
        height: f64,
        entries: impl IntoIterator<Item = Entry<P>>,
    ) -> Result<Self, Error> {
        let mut tree = Self::new(width, height)?;
        for entry in entries {
            tree = tree.insert(entry)?;
        }
        Ok(tree)
    }

    /// Persistent insert: returns a tree that also contains `entry`.
    ///
    /// Fails with [`Error::PointOutOfBounds`] if `entry` lies outside the
    /// domain, and with [`Error::MaxDepthReached`] if it cannot be separated
    /// from an existing entry (see [`MAX_DEPTH`]).
    pub fn insert(&self, entry: Entry<P>) -> Result<Self, Error> {
        Ok(Self {
            width: self.width,
            height: self.height,
            root: self.root.insert(entry, 0)?,
        })
    }

    /// Bulk relocation: apply `transform` to every entry, re-home the
    /// entries that left their leaf's region, then merge underfull branches.
    ///
    /// The transform receives the whole entry so payloads (velocities, say)
    /// can steer the move; it must keep positions inside the domain or the
    /// update fails with [`Error::PointOutOfBounds`].
    pub fn update(&self, mut transform: impl FnMut(Entry<P>) -> Entry<P>) -> Result<Self, Error> {
        let mut displaced = Vec::new();
        let mut root = self.root.map(|quadrant| match quadrant {
            Quadrant::Leaf { region, points } => {
                let mut kept = Vec::with_capacity(points.len());
                for entry in points.iter().cloned() {
                    let moved = transform(entry);
                    if region.contains(moved.position) {
                        kept.push(moved);
                    } else {
                        displaced.push(moved);
                    }
                }
                Quadrant::Leaf {
                    region: *region,
                    points: kept,
                }
            }
            branch => branch.clone(),
        });
        for entry in displaced {
            root = root.insert(entry, 0)?;
        }
        Ok(Self {
            width: self.width,
            height: self.height,
            root: root.trim(),
        })
    }

    /// All entries in the tree, in `[TL, TR, BR, BL]` pre-order.
    pub fn entries(&self) -> Vec<Entry<P>> {
        self.root.entries()
    }
}
