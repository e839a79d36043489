// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_uv_pick --heading-base-level=0

//! Understory UV Pick: resolving a pointer position to a UV point or face.
//!
//! Picking works in three steps:
//!
//! 1. **Naming.** [`PickNames`] assigns every primitive of a mesh a dense,
//!    non-zero [`PickName`]. Points get the low names (`1..=points`), faces
//!    the names above them. [`PickNames::decode`] recovers the
//!    [`Primitive`] from a name by subtracting those offsets.
//! 2. **Hit pass.** A [`PickPass`] is a small square window around the
//!    pointer. Callers replay the primitives they draw, in screen
//!    coordinates, and the pass records the name of every primitive that
//!    intersects the window. Results come back sorted by name.
//! 3. **Cycling.** When several primitives are stacked under the pointer,
//!    [`SelectCycle`] steps through them on repeated clicks at the same spot
//!    instead of always returning the same one.
//!
//! [`PickResolver`] bundles the window tolerance and the cycle counter.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_uv_pick::{PickNames, PickResolver, Primitive};
//!
//! // One triangle over three points, already in screen coordinates.
//! let points = [
//!     Point::new(100.0, 100.0),
//!     Point::new(200.0, 100.0),
//!     Point::new(200.0, 200.0),
//! ];
//! let names = PickNames::new(points.len(), 1);
//!
//! let mut resolver = PickResolver::default();
//! let click = Point::new(100.0, 100.0);
//! let draw = |pass: &mut understory_uv_pick::PickPass| {
//!     pass.outline(names.face(0).unwrap(), &points);
//!     for (i, p) in points.iter().enumerate() {
//!         pass.point(names.point(i).unwrap(), *p);
//!     }
//! };
//!
//! // First click on the corner: the point wins (lowest name).
//! resolver.press(Vec2::new(1000.0, 1000.0));
//! let hit = resolver.pick_at(click, draw).and_then(|n| names.decode(n));
//! assert_eq!(hit, Some(Primitive::Point(0)));
//!
//! // Clicking again in place cycles to the face underneath.
//! resolver.press(Vec2::ZERO);
//! let hit = resolver.pick_at(click, draw).and_then(|n| names.decode(n));
//! assert_eq!(hit, Some(Primitive::Face(0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod cycle;
mod hit;
mod names;
mod pass;

pub use cycle::{PickResolver, SelectCycle};
pub use hit::WindowHit;
pub use names::{PickName, PickNames, Primitive};
pub use pass::{PickHits, PickPass};

/// Default side of the square pick window, in pixels.
pub const DEFAULT_TOLERANCE: f64 = 8.0;

/// Default repeat-click radius (Manhattan distance), in pixels.
pub const DEFAULT_CYCLE_RADIUS: f64 = 4.0;
