// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use understory_uv_pick::{DEFAULT_CYCLE_RADIUS, DEFAULT_TOLERANCE};
use understory_uv_view::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// Tunables of a [`UvEditor`](crate::UvEditor).
#[derive(Clone, Debug)]
pub struct UvEditorConfig {
    /// Zoom factor applied when the editor is created.
    pub initial_zoom: f64,
    /// Smallest zoom factor.
    pub min_zoom: f64,
    /// Largest zoom factor.
    pub max_zoom: f64,
    /// Side of the square pick window around the pointer, in pixels.
    pub pick_tolerance: f64,
    /// Presses closer than this (Manhattan, in pixels) to the previous
    /// pointer position cycle through stacked hits.
    pub cycle_radius: f64,
    /// Background grid layout.
    pub grid: GridConfig,
    /// Colours and sizes handed to the renderer.
    pub style: OverlayStyle,
}

impl Default for UvEditorConfig {
    fn default() -> Self {
        Self {
            initial_zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            pick_tolerance: DEFAULT_TOLERANCE,
            cycle_radius: DEFAULT_CYCLE_RADIUS,
            grid: GridConfig::default(),
            style: OverlayStyle::default(),
        }
    }
}

/// Layout of the background grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Distance between grid lines, in pixels of the 512-pixel reference view.
    pub spacing: f64,
    /// Every `major_every`-th line is a major line.
    pub major_every: i64,
    /// Minor lines are left out above this zoom factor.
    pub minor_max_zoom: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: 16.0,
            major_every: 4,
            minor_max_zoom: 2.0,
        }
    }
}

/// Colours and sizes of the UV overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Unselected edges and points.
    pub normal: Color,
    /// Selected edges and points.
    pub highlight: Color,
    /// Tint of the eight texture tiles around the unit square.
    pub tile_tint: Color,
    /// Outline of the unit square.
    pub border: Color,
    /// Major grid lines.
    pub major_grid: Color,
    /// Minor grid lines.
    pub minor_grid: Color,
    /// Point sprite size in pixels.
    pub point_size: f64,
    /// Edge width in pixels.
    pub edge_width: f64,
    /// Unit square outline width in pixels.
    pub border_width: f64,
    /// Major grid line width in pixels.
    pub major_grid_width: f64,
    /// Minor grid line width in pixels.
    pub minor_grid_width: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            normal: Color::new([0.0, 1.0, 0.0, 0.5]),
            highlight: Color::new([1.0, 1.0, 0.0, 0.5]),
            tile_tint: Color::new([1.0, 0.8, 0.8, 1.0]),
            border: Color::new([0.5, 0.5, 0.5, 0.5]),
            major_grid: Color::new([1.0, 1.0, 1.0, 0.2]),
            minor_grid: Color::new([1.0, 1.0, 1.0, 0.1]),
            point_size: 3.5,
            edge_width: 1.0,
            border_width: 2.0,
            major_grid_width: 1.2,
            minor_grid_width: 0.8,
        }
    }
}
