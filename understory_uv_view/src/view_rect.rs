// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Orthographic projection bounds in world space.
///
/// The rect maps the widget's left/right edges to `x_min`/`x_max` and its
/// bottom/top edges to `y_min`/`y_max`. Screen `y` grows downwards while world
/// `y` grows upwards, so conversions flip the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect {
    /// World `x` at the widget's left edge.
    pub x_min: f64,
    /// World `x` at the widget's right edge.
    pub x_max: f64,
    /// World `y` at the widget's bottom edge.
    pub y_min: f64,
    /// World `y` at the widget's top edge.
    pub y_max: f64,
}

impl ViewRect {
    /// Creates a view rect from its four bounds.
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Horizontal extent in world units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent in world units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// World-space centre of the rect.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            0.5 * (self.x_min + self.x_max),
            0.5 * (self.y_min + self.y_max),
        )
    }

    /// Maps a widget-space point to world space, for a widget of `size` pixels.
    ///
    /// A degenerate widget maps every point to [`ViewRect::center`].
    #[must_use]
    pub fn screen_to_world(&self, pt: Point, size: Size) -> Point {
        if size.width <= 0.0 || size.height <= 0.0 {
            return self.center();
        }
        Point::new(
            self.x_min + pt.x / size.width * self.width(),
            self.y_max - pt.y / size.height * self.height(),
        )
    }

    /// Maps a world-space point into the pixels of a widget of `size`.
    ///
    /// A degenerate rect maps every point to the widget centre.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point, size: Size) -> Point {
        let (w, h) = (self.width(), self.height());
        if w == 0.0 || h == 0.0 {
            return Point::new(0.5 * size.width, 0.5 * size.height);
        }
        Point::new(
            (pt.x - self.x_min) / w * size.width,
            (self.y_max - pt.y) / h * size.height,
        )
    }
}
