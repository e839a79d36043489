// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_uv_mesh::Face;
use understory_uv_pick::Primitive;

/// What the user has selected in the UV view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    None,
    /// A UV point, by index.
    Point(usize),
    /// A face, by index.
    Face(usize),
}

impl From<Option<Primitive>> for Selection {
    fn from(picked: Option<Primitive>) -> Self {
        match picked {
            None => Self::None,
            Some(Primitive::Point(i)) => Self::Point(i),
            Some(Primitive::Face(i)) => Self::Face(i),
        }
    }
}

/// The current [`Selection`] plus a revision counter.
///
/// The revision bumps only when the selection actually changes, so observers
/// can cheaply tell whether a redraw of selection highlights is needed.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    current: Selection,
    revision: u64,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Selection::None,
            revision: 0,
        }
    }

    /// The current selection.
    #[must_use]
    pub fn get(&self) -> Selection {
        self.current
    }

    /// Returns the current revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Index of the selected point, if a point is selected.
    ///
    /// Only a selected point can be dragged.
    #[must_use]
    pub fn point(&self) -> Option<usize> {
        match self.current {
            Selection::Point(i) => Some(i),
            _ => None,
        }
    }

    /// Index of the selected face, if a face is selected.
    #[must_use]
    pub fn face(&self) -> Option<usize> {
        match self.current {
            Selection::Face(i) => Some(i),
            _ => None,
        }
    }

    /// Replaces the selection with the result of a pick.
    ///
    /// A miss (`None`) clears it.
    pub fn set(&mut self, selection: impl Into<Selection>) {
        let selection = selection.into();
        if self.current == selection {
            return;
        }
        self.current = selection;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.set(Selection::None);
    }

    /// Points drawn highlighted: the selected point, or the corners of the
    /// selected face.
    ///
    /// Highlighting a face's corners does not select them.
    #[must_use]
    pub fn highlighted_points(&self, faces: &[Face]) -> HighlightedPoints {
        match self.current {
            Selection::None => HighlightedPoints::None,
            Selection::Point(i) => HighlightedPoints::One(i),
            Selection::Face(f) => faces
                .get(f)
                .map_or(HighlightedPoints::None, |face| {
                    HighlightedPoints::Corners(face.corners())
                }),
        }
    }
}

/// The set of highlighted points returned by [`SelectionState::highlighted_points`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightedPoints {
    /// No highlighted points.
    None,
    /// A single selected point.
    One(usize),
    /// The corners of a selected face.
    Corners([usize; 3]),
}

impl HighlightedPoints {
    /// Returns `true` if point `index` is highlighted.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::None => false,
            Self::One(i) => *i == index,
            Self::Corners(c) => c.contains(&index),
        }
    }
}
