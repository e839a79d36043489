// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, UNIT, ViewRect};

/// Derives the projection bounds for a widget of `size` pixels.
///
/// `pan` is an accumulated offset in screen pixels; it and the half-extents
/// are scaled into world units by `UNIT * zoom`. Panning right moves the
/// world right on screen, panning down moves it down.
#[must_use]
pub fn compute_view_rect(size: Size, pan: Vec2, zoom: f64) -> ViewRect {
    let scale = UNIT * zoom;
    let off_x = scale * 0.5 * size.width;
    let off_y = scale * 0.5 * size.height;
    let pos_x = scale * pan.x;
    let pos_y = scale * pan.y;
    ViewRect::new(-off_x - pos_x, off_x - pos_x, -off_y + pos_y, off_y + pos_y)
}

/// Pan + zoom camera over UV world space.
///
/// `ViewportTransform` keeps the widget size, an accumulated pan offset in
/// screen pixels and a clamped zoom factor. Every mutation rebuilds the
/// [`ViewRect`], so [`ViewportTransform::view_rect`] always reflects the
/// current state.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    size: Size,
    pan: Vec2,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    view_rect: ViewRect,
}

impl ViewportTransform {
    /// Creates a viewport for a widget of `size` pixels.
    ///
    /// - Initial zoom is [`DEFAULT_ZOOM`].
    /// - Initial pan is zero, so the widget centre looks at the world origin.
    /// - Zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let mut vp = Self {
            size,
            pan: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            view_rect: ViewRect::new(0.0, 0.0, 0.0, 0.0),
        };
        vp.rebuild_view_rect();
        vp
    }

    /// Returns the widget size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the widget size in pixels.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.rebuild_view_rect();
    }

    /// Returns the accumulated pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Accumulates a pan offset given in screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan += delta;
        self.rebuild_view_rect();
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor, clamping it into the configured range.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if self.zoom == clamped {
            return;
        }
        self.zoom = clamped;
        self.rebuild_view_rect();
    }

    /// Multiplies the zoom factor by `factor`, clamping the result.
    ///
    /// Factors at or below zero land on the minimum zoom.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    /// Returns the zoom limits as `(min, max)`.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Returns the projection bounds for the current pan, zoom and size.
    #[must_use]
    pub fn view_rect(&self) -> ViewRect {
        self.view_rect
    }

    /// World units spanned by one screen pixel.
    ///
    /// Pointer deltas multiplied by this value become UV deltas.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        UNIT * self.zoom
    }

    /// Converts a widget-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.view_rect.screen_to_world(pt, self.size)
    }

    /// Converts a world-space point into widget coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.view_rect.world_to_screen(pt, self.size)
    }

    /// Restores the initial pan and zoom, keeping size and zoom limits.
    pub fn reset(&mut self) {
        self.pan = Vec2::ZERO;
        self.zoom = DEFAULT_ZOOM.clamp(self.min_zoom, self.max_zoom);
        self.rebuild_view_rect();
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            size: self.size,
            pan: self.pan,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            view_rect: self.view_rect,
        }
    }

    fn rebuild_view_rect(&mut self) {
        self.view_rect = compute_view_rect(self.size, self.pan, self.zoom);
    }
}

/// Debug snapshot of a [`ViewportTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Widget size in pixels.
    pub size: Size,
    /// Accumulated pan offset in screen pixels.
    pub pan: Vec2,
    /// Current zoom factor.
    pub zoom: f64,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Projection bounds derived from the fields above.
    pub view_rect: ViewRect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ViewportTransform, compute_view_rect};
    use crate::{DEFAULT_ZOOM, ViewRect, drag_zoom_factor, wheel_zoom_factor};

    #[test]
    fn base_sized_widget_shows_one_unit_at_zoom_one() {
        let mut vp = ViewportTransform::new(Size::new(512.0, 256.0));
        assert_eq!(vp.zoom(), DEFAULT_ZOOM);

        vp.set_zoom(1.0);
        assert_eq!(vp.view_rect(), ViewRect::new(-0.5, 0.5, -0.25, 0.25));
    }

    #[test]
    fn pan_moves_world_with_the_pointer() {
        let mut vp = ViewportTransform::new(Size::new(512.0, 512.0));
        vp.set_zoom(1.0);
        let origin_before = vp.world_to_screen(Point::ZERO);

        vp.pan_by(Vec2::new(10.0, -20.0));
        let origin_after = vp.world_to_screen(Point::ZERO);

        assert!((origin_after.x - origin_before.x - 10.0).abs() < 1e-9);
        assert!((origin_after.y - origin_before.y + 20.0).abs() < 1e-9);
    }

    #[test]
    fn screen_world_roundtrip() {
        let mut vp = ViewportTransform::new(Size::new(640.0, 480.0));
        vp.pan_by(Vec2::new(33.0, 12.0));
        vp.zoom_by(1.7);

        let screen = Point::new(100.0, 400.0);
        let back = vp.world_to_screen(vp.screen_to_world(screen));
        assert!((back.x - screen.x).abs() < 1e-9);
        assert!((back.y - screen.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_clamped_and_ignores_nan() {
        let mut vp = ViewportTransform::new(Size::new(100.0, 100.0));
        vp.zoom_by(1_000.0);
        assert_eq!(vp.zoom(), 10.0);
        vp.zoom_by(drag_zoom_factor(-640.0));
        assert_eq!(vp.zoom(), 0.1);
        vp.zoom_by(f64::NAN);
        assert_eq!(vp.zoom(), 0.1);
    }

    #[test]
    fn zoom_limits_are_normalized_and_reclamp() {
        let mut vp = ViewportTransform::new(Size::new(100.0, 100.0));
        vp.set_zoom_limits(2.0, 0.5);
        assert_eq!(vp.zoom_limits(), (0.5, 2.0));
        assert_eq!(vp.zoom(), DEFAULT_ZOOM);

        vp.set_zoom_limits(2.0, 4.0);
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn wheel_notch_zooms_a_little() {
        let factor = wheel_zoom_factor(120.0);
        assert!((factor - (1.0 + 15.0 / 64.0)).abs() < 1e-12);
    }

    #[test]
    fn resize_rebuilds_rect_and_debug_info_matches() {
        let mut vp = ViewportTransform::new(Size::new(100.0, 100.0));
        vp.set_size(Size::new(300.0, 200.0));

        let info = vp.debug_info();
        assert_eq!(info.size, Size::new(300.0, 200.0));
        assert_eq!(
            info.view_rect,
            compute_view_rect(info.size, info.pan, info.zoom)
        );

        vp.pan_by(Vec2::new(5.0, 5.0));
        vp.reset();
        assert_eq!(vp.pan(), Vec2::ZERO);
        assert_eq!(vp.zoom(), DEFAULT_ZOOM);
    }
}
