// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal primitives: fold, map, and depth/breadth-first iteration.
//!
//! All traversals visit children in the fixed `[TL, TR, BR, BL]` order.
//! Because trees are immutable, iterators can be re-created from the same
//! value at any time and always yield the same sequence.

use alloc::collections::VecDeque;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::tree::{Quadrant, Tree};

impl<P> Quadrant<P> {
    /// Pre-order fold: `combine` sees the node itself before its children,
    /// children in fixed order.
    pub fn fold<A, F: FnMut(A, &Self) -> A>(&self, seed: A, mut combine: F) -> A {
        self.fold_inner(seed, &mut combine)
    }

    fn fold_inner<A, F: FnMut(A, &Self) -> A>(&self, seed: A, combine: &mut F) -> A {
        let acc = combine(seed, self);
        match self {
            Self::Leaf { .. } => acc,
            Self::Branch { children, .. } => children
                .iter()
                .fold(acc, |acc, child| child.fold_inner(acc, combine)),
        }
    }

    /// Pre-order map: transform the node, then rebuild any branch result
    /// from its mapped children.
    ///
    /// The transform must produce a value consistent with the node's shape
    /// unless it intentionally changes it; [`Tree::update`] uses this to
    /// rewrite only leaf point collections.
    pub fn map<F: FnMut(&Self) -> Self>(&self, mut transform: F) -> Self {
        self.map_inner(&mut transform)
    }

    fn map_inner<F: FnMut(&Self) -> Self>(&self, transform: &mut F) -> Self {
        match transform(self) {
            leaf @ Self::Leaf { .. } => leaf,
            Self::Branch { region, children } => {
                let children = children.map(|child| Arc::new(child.map_inner(transform)));
                Self::Branch { region, children }
            }
        }
    }

    /// Iterate quadrants depth-first, in pre-order.
    pub fn depth_first(&self) -> DepthFirst<'_, P> {
        DepthFirst {
            stack: Vec::from([self]),
        }
    }

    /// Iterate quadrants breadth-first, in level order.
    pub fn breadth_first(&self) -> BreadthFirst<'_, P> {
        BreadthFirst {
            queue: VecDeque::from([self]),
        }
    }
}

impl<P> Tree<P> {
    /// Pre-order fold over the whole tree, starting at the root.
    pub fn fold<A, F: FnMut(A, &Quadrant<P>) -> A>(&self, seed: A, combine: F) -> A {
        self.root().fold(seed, combine)
    }

    /// Iterate the tree's quadrants depth-first, in pre-order.
    pub fn depth_first(&self) -> DepthFirst<'_, P> {
        self.root().depth_first()
    }

    /// Iterate the tree's quadrants breadth-first, in level order.
    pub fn breadth_first(&self) -> BreadthFirst<'_, P> {
        self.root().breadth_first()
    }
}

/// Pre-order iterator over quadrants, driven by an explicit stack.
#[derive(Debug)]
pub struct DepthFirst<'a, P> {
    stack: Vec<&'a Quadrant<P>>,
}

impl<'a, P> Iterator for DepthFirst<'a, P> {
    type Item = &'a Quadrant<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let quadrant = self.stack.pop()?;
        if let Some(children) = quadrant.children() {
            // Push reversed so children pop in forward order.
            for child in children.iter().rev() {
                self.stack.push(child.as_ref());
            }
        }
        Some(quadrant)
    }
}

/// Level-order iterator over quadrants, driven by an explicit queue.
#[derive(Debug)]
pub struct BreadthFirst<'a, P> {
    queue: VecDeque<&'a Quadrant<P>>,
}

impl<'a, P> Iterator for BreadthFirst<'a, P> {
    type Item = &'a Quadrant<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let quadrant = self.queue.pop_front()?;
        if let Some(children) = quadrant.children() {
            for child in children.iter() {
                self.queue.push_back(child.as_ref());
            }
        }
        Some(quadrant)
    }
}
