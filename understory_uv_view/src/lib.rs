// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_uv_view --heading-base-level=0

//! Understory UV View: the orthographic viewport used by UV editors.
//!
//! This crate models the camera of a UV editing surface. It is headless:
//! callers own the widget, the renderer, and the event loop, and use this
//! crate to derive
//! - the orthographic projection bounds ([`ViewRect`]) for the current pan,
//!   zoom and widget size,
//! - conversions between widget pixels and world space, for hit testing and
//!   for turning pointer deltas into UV deltas.
//!
//! World space is sized against a fixed reference widget of [`BASE_SIZE`]
//! pixels: at zoom `1.0`, a widget that is `BASE_SIZE` pixels wide shows
//! exactly one world unit horizontally. Larger zoom factors show *more* of the
//! world, so a pixel always spans `zoom / BASE_SIZE` world units.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_uv_view::{ViewportTransform, drag_zoom_factor};
//!
//! let mut view = ViewportTransform::new(Size::new(512.0, 512.0));
//! view.set_zoom(1.0);
//!
//! // The widget centre looks at the world origin.
//! let centre = view.screen_to_world(Point::new(256.0, 256.0));
//! assert!(centre.x.abs() < 1e-12 && centre.y.abs() < 1e-12);
//!
//! // Middle-button drag pans, right-button drag zooms.
//! view.pan_by(Vec2::new(32.0, 0.0));
//! view.zoom_by(drag_zoom_factor(64.0));
//! assert_eq!(view.zoom(), 2.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod view_rect;
mod viewport;

pub use view_rect::ViewRect;
pub use viewport::{ViewportDebugInfo, ViewportTransform, compute_view_rect};

/// Side length in pixels of the reference widget that world units are sized against.
pub const BASE_SIZE: f64 = 512.0;

/// World units covered by one pixel at zoom `1.0`.
pub const UNIT: f64 = 1.0 / BASE_SIZE;

/// Pointer travel in pixels that doubles (or cancels) the zoom factor.
pub const ZOOM_UNIT: f64 = 64.0;

/// Smallest zoom factor accepted by default.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor accepted by default.
pub const MAX_ZOOM: f64 = 10.0;

/// Zoom factor of a freshly created viewport.
pub const DEFAULT_ZOOM: f64 = 1.2;

/// Zoom factor for a vertical drag of `dy` pixels.
#[must_use]
pub fn drag_zoom_factor(dy: f64) -> f64 {
    1.0 + dy / ZOOM_UNIT
}

/// Zoom factor for a wheel delta as reported by most windowing systems
/// (eighths of a degree, one notch being `120`).
#[must_use]
pub fn wheel_zoom_factor(delta: f64) -> f64 {
    1.0 + (delta / 8.0) / ZOOM_UNIT
}
