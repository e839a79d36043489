// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-facing description of the UV view.
//!
//! A renderer sets up an orthographic projection from
//! [`UvScene::view_rect`] and draws, back to front: the texture tiles, the
//! unit square border, the grid, the face edges and the UV points. All
//! geometry is in world space. UV space is shifted by [`UV_ORIGIN`] so that
//! the unit square is centred on the world origin.

use std::path::PathBuf;

use kurbo::{Line, Point, Rect, Vec2};
use peniko::Color;
use understory_uv_mesh::{Face, UvMesh};
use understory_uv_view::{UNIT, ViewRect};

use crate::{GridConfig, HighlightedPoints, OverlayStyle};

/// Offset between UV and world space: `world = uv - UV_ORIGIN`.
pub const UV_ORIGIN: Vec2 = Vec2::new(0.5, 0.5);

/// Maps a UV coordinate to world space.
#[must_use]
pub fn uv_to_world(uv: Point) -> Point {
    uv - UV_ORIGIN
}

/// Maps a world-space point to a UV coordinate.
#[must_use]
pub fn world_to_uv(world: Point) -> Point {
    world + UV_ORIGIN
}

/// A texture bound through the texture cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureBinding {
    /// Resolved file path.
    pub path: PathBuf,
    /// Mipmap levels reported by the cache; never `0`.
    pub mip_levels: u32,
}

/// One repetition of the texture behind the UVs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// World-space quad; the whole texture is stretched across it.
    pub rect: Rect,
    /// Tint for the tiles around the unit square; `None` for the unit square itself.
    pub tint: Option<Color>,
}

/// Whether a grid line is a major or a minor one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridWeight {
    /// Every few lines, drawn stronger.
    Major,
    /// The lines in between.
    Minor,
}

/// A grid line spanning the view rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// World-space segment.
    pub line: Line,
    /// Major or minor.
    pub weight: GridWeight,
}

/// One edge of a face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneEdge {
    /// Face the edge belongs to.
    pub face: usize,
    /// World-space segment.
    pub line: Line,
    /// `true` if the face is selected.
    pub highlighted: bool,
}

/// One UV point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePoint {
    /// Index into the UV buffer.
    pub index: usize,
    /// World-space position.
    pub at: Point,
    /// `true` if the point is selected or a corner of the selected face.
    pub highlighted: bool,
}

/// Everything a renderer needs to draw one frame of the UV view.
#[derive(Clone, Debug)]
pub struct UvScene {
    /// Orthographic projection bounds.
    pub view_rect: ViewRect,
    /// Current zoom factor.
    pub zoom: f64,
    /// Background texture, if one is bound.
    pub texture: Option<TextureBinding>,
    /// The unit square and its eight neighbours, row by row from the bottom left.
    pub tiles: [Tile; 9],
    /// Closed outline of the unit square.
    pub border: [Point; 5],
    /// Grid lines covering the view rect.
    pub grid: Vec<GridLine>,
    /// Face edges, last face first.
    pub edges: Vec<SceneEdge>,
    /// UV points, last point first.
    pub points: Vec<ScenePoint>,
    /// Colours and sizes.
    pub style: OverlayStyle,
}

/// A primitive in drawing order, in world space.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Drawn {
    Face {
        index: usize,
        face: Face,
        corners: [Point; 3],
    },
    Point { index: usize, at: Point },
}

/// Visits faces from last to first, then points from last to first.
///
/// Pick names count down in the same order, so this walk is shared by
/// drawing and picking.
pub(crate) fn for_each_primitive(mesh: &UvMesh, mut visit: impl FnMut(Drawn)) {
    for (index, face) in mesh.faces().iter().enumerate().rev() {
        if let Some(corners) = mesh.face_corners(index) {
            visit(Drawn::Face {
                index,
                face: *face,
                corners: corners.map(uv_to_world),
            });
        }
    }
    for (index, uv) in mesh.buffer().as_slice().iter().enumerate().rev() {
        visit(Drawn::Point {
            index,
            at: uv_to_world(*uv),
        });
    }
}

pub(crate) fn tiles(tint: Color) -> [Tile; 9] {
    core::array::from_fn(|i| {
        let (row, col) = (i / 3, i % 3);
        let origin = Point::new(col as f64 - 1.5, row as f64 - 1.5);
        Tile {
            rect: Rect::from_origin_size(origin, (1.0, 1.0)),
            tint: (i != 4).then_some(tint),
        }
    })
}

pub(crate) fn border() -> [Point; 5] {
    [
        Point::new(-0.5, -0.5),
        Point::new(0.5, -0.5),
        Point::new(0.5, 0.5),
        Point::new(-0.5, 0.5),
        Point::new(-0.5, -0.5),
    ]
}

/// Grid lines at multiples of the grid spacing across `rect`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "grid indices of any sane view rect fit in i64"
)]
pub(crate) fn grid_lines(rect: ViewRect, zoom: f64, grid: &GridConfig) -> Vec<GridLine> {
    let step = grid.spacing * UNIT;
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let every = grid.major_every.max(1);
    let weight = |i: i64| {
        if i % every == 0 {
            Some(GridWeight::Major)
        } else if zoom > grid.minor_max_zoom {
            None
        } else {
            Some(GridWeight::Minor)
        }
    };

    let mut lines = Vec::new();
    let (x0, x1) = ((rect.x_min / step).round() as i64, (rect.x_max / step).round() as i64);
    for i in x0..x1 {
        if let Some(weight) = weight(i) {
            let x = step * i as f64;
            lines.push(GridLine {
                line: Line::new((x, rect.y_min), (x, rect.y_max)),
                weight,
            });
        }
    }
    let (y0, y1) = ((rect.y_min / step).round() as i64, (rect.y_max / step).round() as i64);
    for i in y0..y1 {
        if let Some(weight) = weight(i) {
            let y = step * i as f64;
            lines.push(GridLine {
                line: Line::new((rect.x_min, y), (rect.x_max, y)),
                weight,
            });
        }
    }
    lines
}

pub(crate) fn overlay(
    mesh: &UvMesh,
    selected_face: Option<usize>,
    lit: HighlightedPoints,
) -> (Vec<SceneEdge>, Vec<ScenePoint>) {
    let mut edges = Vec::with_capacity(mesh.faces().len() * 3);
    let mut points = Vec::with_capacity(mesh.buffer().len());
    let world = |i: usize| mesh.buffer().get(i).map(uv_to_world);
    for_each_primitive(mesh, |drawn| match drawn {
        Drawn::Face { index, face, .. } => {
            let highlighted = selected_face == Some(index);
            for (a, b) in face.edges() {
                if let (Some(p0), Some(p1)) = (world(a), world(b)) {
                    edges.push(SceneEdge {
                        face: index,
                        line: Line::new(p0, p1),
                        highlighted,
                    });
                }
            }
        }
        Drawn::Point { index, at } => points.push(ScenePoint {
            index,
            at,
            highlighted: lit.contains(index),
        }),
    });
    (edges, points)
}
