// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::{Face, LoadError};

/// The editable UV coordinates of one element.
///
/// The length and order are fixed at construction: faces refer to points by
/// index, and write-back must replace the document's array element for
/// element. Only point positions change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UvBuffer {
    coords: Vec<Point>,
}

impl UvBuffer {
    /// Wraps a coordinate sequence.
    #[must_use]
    pub fn new(coords: Vec<Point>) -> Self {
        Self { coords }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if the buffer holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Point `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.coords.get(index).copied()
    }

    /// All points in document order.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.coords
    }

    /// Moves point `index` by a pointer delta given in screen pixels.
    ///
    /// `units_per_pixel` converts pixels to UV units (`zoom / 512` for the
    /// standard viewport). Screen `y` grows downwards and UV `v` upwards, so
    /// the vertical component is subtracted. Returns `false`, leaving the
    /// buffer untouched, if `index` is out of range.
    pub fn drag_point(&mut self, index: usize, screen_delta: Vec2, units_per_pixel: f64) -> bool {
        let Some(pt) = self.coords.get_mut(index) else {
            return false;
        };
        pt.x += units_per_pixel * screen_delta.x;
        pt.y -= units_per_pixel * screen_delta.y;
        true
    }
}

/// UV coordinates together with the faces that connect them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UvMesh {
    buffer: UvBuffer,
    faces: Vec<Face>,
}

impl UvMesh {
    /// Builds a mesh, checking that every face corner refers to an existing point.
    pub fn new(buffer: UvBuffer, faces: Vec<Face>) -> Result<Self, LoadError> {
        let len = buffer.len();
        for (face, f) in faces.iter().enumerate() {
            if let Some(&index) = f.0.iter().find(|&&i| i >= len) {
                return Err(LoadError::IndexOutOfRange { face, index });
            }
        }
        Ok(Self { buffer, faces })
    }

    /// The UV coordinates.
    #[must_use]
    pub fn buffer(&self) -> &UvBuffer {
        &self.buffer
    }

    /// Mutable access to the UV coordinates.
    ///
    /// The buffer cannot be resized through this reference, so face indices stay valid.
    pub fn buffer_mut(&mut self) -> &mut UvBuffer {
        &mut self.buffer
    }

    /// The faces, in document order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Corner coordinates of face `index`.
    #[must_use]
    pub fn face_corners(&self, index: usize) -> Option<[Point; 3]> {
        let [a, b, c] = self.faces.get(index)?.corners();
        Some([
            self.buffer.get(a)?,
            self.buffer.get(b)?,
            self.buffer.get(c)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{UvBuffer, UvMesh};
    use crate::{Face, LoadError};

    #[test]
    fn drag_inverts_vertical_axis() {
        let mut buf = UvBuffer::new(vec![Point::new(0.5, 0.5)]);
        assert!(buf.drag_point(0, Vec2::new(64.0, 128.0), 1.0 / 512.0));
        assert_eq!(buf.get(0), Some(Point::new(0.625, 0.25)));
    }

    #[test]
    fn drag_out_of_range_is_rejected() {
        let mut buf = UvBuffer::new(vec![Point::ZERO]);
        assert!(!buf.drag_point(1, Vec2::new(1.0, 1.0), 1.0));
        assert_eq!(buf.as_slice(), &[Point::ZERO]);
    }

    #[test]
    fn mesh_rejects_dangling_corners() {
        let buf = UvBuffer::new(vec![Point::ZERO; 3]);
        let err = UvMesh::new(buf, vec![Face::new(0, 1, 2), Face::new(1, 2, 3)]).unwrap_err();
        assert_eq!(err, LoadError::IndexOutOfRange { face: 1, index: 3 });
    }

    #[test]
    fn face_corners_follow_the_buffer() {
        let buf = UvBuffer::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        let mut mesh = UvMesh::new(buf, vec![Face::new(2, 0, 1)]).unwrap();
        assert!(
            mesh.buffer_mut()
                .drag_point(0, Vec2::new(256.0, -256.0), 1.0 / 512.0)
        );
        assert_eq!(
            mesh.face_corners(0),
            Some([
                Point::new(1.0, 1.0),
                Point::new(0.5, 0.5),
                Point::new(1.0, 0.0)
            ])
        );
        assert_eq!(mesh.face_corners(1), None);
    }
}
