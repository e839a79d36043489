// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Rect, Size};
use smallvec::SmallVec;

use crate::{PickName, WindowHit};

/// Accumulates the names of every primitive drawn into a pick window.
///
/// A pass replaces a selection-mode render: callers replay the primitives
/// they would draw, in screen coordinates, each tagged with its
/// [`PickName`]. Any primitive that intersects the window is recorded; the
/// pass does not try to find the nearest one.
#[derive(Clone, Debug)]
pub struct PickPass {
    window: Rect,
    hits: SmallVec<[PickName; 8]>,
}

impl PickPass {
    /// Starts a pass over a square window of side `tolerance` centred on `at`.
    #[must_use]
    pub fn new(at: Point, tolerance: f64) -> Self {
        Self::with_window(Rect::from_center_size(at, Size::new(tolerance, tolerance)))
    }

    /// Starts a pass over an explicit window.
    #[must_use]
    pub fn with_window(window: Rect) -> Self {
        Self {
            window,
            hits: SmallVec::new(),
        }
    }

    /// The window this pass tests against.
    #[must_use]
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Records `name` if `shape` intersects the window; returns whether it did.
    pub fn shape(&mut self, name: PickName, shape: &impl WindowHit) -> bool {
        let hit = shape.hits_window(self.window);
        if hit {
            self.hits.push(name);
        }
        hit
    }

    /// Records `name` if the point lies inside the window.
    pub fn point(&mut self, name: PickName, at: Point) -> bool {
        self.shape(name, &at)
    }

    /// Records `name` once if any edge of the closed polygon through
    /// `corners` intersects the window.
    pub fn outline(&mut self, name: PickName, corners: &[Point]) -> bool {
        let n = corners.len();
        let hit = (0..n).any(|i| {
            Line::new(corners[i], corners[(i + 1) % n]).hits_window(self.window)
        });
        if hit {
            self.hits.push(name);
        }
        hit
    }

    /// Ends the pass, returning its hits sorted by ascending name.
    #[must_use]
    pub fn finish(mut self) -> PickHits {
        self.hits.sort_unstable();
        PickHits { names: self.hits }
    }
}

/// Names hit by a [`PickPass`], in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickHits {
    names: SmallVec<[PickName; 8]>,
}

impl PickHits {
    /// Number of hits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing was hit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The hit names, ascending.
    #[must_use]
    pub fn as_slice(&self) -> &[PickName] {
        &self.names
    }

    /// Picks the hit selected by a cycle count, wrapping around.
    #[must_use]
    pub fn cycled(&self, cycle: usize) -> Option<PickName> {
        if self.names.is_empty() {
            None
        } else {
            Some(self.names[cycle % self.names.len()])
        }
    }
}
