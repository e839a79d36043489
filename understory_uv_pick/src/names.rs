// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroUsize;

/// Identifier of a primitive within one hit pass.
///
/// Names are dense and start at `1`; there is no name for "background".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickName(NonZeroUsize);

impl PickName {
    /// Creates a name from its raw value, or `None` for `0`.
    #[must_use]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

/// A selectable primitive of a UV mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// A UV point, by index into the coordinate sequence.
    Point(usize),
    /// A face, by index into the face list.
    Face(usize),
}

/// Name space for a mesh with a given number of points and faces.
///
/// Names count down in drawing order: the last face gets
/// `point_count + face_count`, the first point gets `1`. Equivalently, point
/// `i` is named `i + 1` and face `j` is named `point_count + 1 + j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickNames {
    point_count: usize,
    face_count: usize,
}

impl PickNames {
    /// Creates the name space for `point_count` points and `face_count` faces.
    #[must_use]
    pub const fn new(point_count: usize, face_count: usize) -> Self {
        Self {
            point_count,
            face_count,
        }
    }

    /// Number of named points.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    /// Number of named faces.
    #[must_use]
    pub const fn face_count(&self) -> usize {
        self.face_count
    }

    /// Highest name in use; `0` for an empty mesh.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.point_count + self.face_count
    }

    /// Returns `true` if the name space has no names.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of point `index`, or `None` if out of range.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<PickName> {
        if index < self.point_count {
            PickName::new(index + 1)
        } else {
            None
        }
    }

    /// Name of face `index`, or `None` if out of range.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<PickName> {
        if index < self.face_count {
            PickName::new(self.point_count + 1 + index)
        } else {
            None
        }
    }

    /// Name of `primitive`, or `None` if its index is out of range.
    #[must_use]
    pub fn encode(&self, primitive: Primitive) -> Option<PickName> {
        match primitive {
            Primitive::Point(i) => self.point(i),
            Primitive::Face(j) => self.face(j),
        }
    }

    /// Recovers the primitive a name was assigned to.
    ///
    /// Names beyond [`PickNames::len`] decode to `None`.
    #[must_use]
    pub fn decode(&self, name: PickName) -> Option<Primitive> {
        let idx = name.get() - 1;
        if idx < self.point_count {
            Some(Primitive::Point(idx))
        } else if idx - self.point_count < self.face_count {
            Some(Primitive::Face(idx - self.point_count))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PickName, PickNames, Primitive};

    #[test]
    fn zero_is_not_a_name() {
        assert!(PickName::new(0).is_none());
        assert_eq!(PickName::new(7).map(PickName::get), Some(7));
    }

    #[test]
    fn faces_sit_above_points() {
        let names = PickNames::new(3, 2);
        assert_eq!(names.len(), 5);
        assert_eq!(names.point(0), PickName::new(1));
        assert_eq!(names.point(2), PickName::new(3));
        assert_eq!(names.face(0), PickName::new(4));
        assert_eq!(names.face(1), PickName::new(5));
        assert_eq!(names.point(3), None);
        assert_eq!(names.face(2), None);
    }

    #[test]
    fn decode_rejects_names_past_the_end() {
        let names = PickNames::new(3, 2);
        let past = PickName::new(6).unwrap();
        assert_eq!(names.decode(past), None);
        assert_eq!(
            names.decode(PickName::new(5).unwrap()),
            Some(Primitive::Face(1))
        );
    }

    #[test]
    fn empty_name_space() {
        let names = PickNames::new(0, 0);
        assert!(names.is_empty());
        assert_eq!(names.decode(PickName::new(1).unwrap()), None);
    }
}
