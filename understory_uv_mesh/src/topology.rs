// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A triangle in UV space, as three indices into the UV coordinate sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face(pub [usize; 3]);

impl Face {
    /// Creates a face from its three corner indices.
    #[must_use]
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    /// The corner indices, in winding order.
    #[must_use]
    pub const fn corners(&self) -> [usize; 3] {
        self.0
    }

    /// The three edges as `(from, to)` index pairs, closing back to the first corner.
    #[must_use]
    pub const fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }

    /// Returns `true` if `index` is one of the corners.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Triangle topology as stored by a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Independent triangles.
    Triangles(Vec<[u32; 3]>),
    /// Triangle strips; each strip is expanded on its own.
    Strips(Vec<Vec<u32>>),
}

impl Topology {
    /// Expands the topology into a flat face list.
    #[must_use]
    pub fn faces(&self) -> Vec<Face> {
        match self {
            Self::Triangles(tris) => tris
                .iter()
                .map(|&[a, b, c]| Face::new(a as usize, b as usize, c as usize))
                .collect(),
            Self::Strips(strips) => strips.iter().flat_map(|s| strip_faces(s)).collect(),
        }
    }
}

/// Expands one triangle strip into faces.
///
/// A strip of `n` indices yields `n - 2` faces `(p[i], p[i+1], p[i+2])`.
/// Winding is kept as listed, without flipping every other triangle. Strips
/// shorter than three indices yield nothing.
pub fn strip_faces(strip: &[u32]) -> impl Iterator<Item = Face> + '_ {
    strip
        .windows(3)
        .map(|w| Face::new(w[0] as usize, w[1] as usize, w[2] as usize))
}
