// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer buttons and the last-position tracker used for deltas.
//!
//! The editor interprets every press and move relative to the last pointer
//! position it acted on:
//!
//! 1) A press calls [`PointerTracker::press`], which returns the travel
//!    since the previous position (used for click cycling) and records the
//!    new position.
//! 2) A move asks [`PointerTracker::delta`] for the travel, and calls
//!    [`PointerTracker::advance`] only if it actually handled the move.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_uv_editor::pointer::PointerTracker;
//!
//! let mut tracker = PointerTracker::default();
//! tracker.press(Point::new(10.0, 20.0));
//!
//! let delta = tracker.delta(Point::new(15.0, 25.0));
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//! tracker.advance(Point::new(15.0, 25.0));
//! assert_eq!(tracker.last(), Point::new(15.0, 25.0));
//! ```

use kurbo::{Point, Vec2};

/// A single pointer button, as reported with press and release events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button: pick, select and drag points.
    Primary,
    /// Usually the right mouse button: drag to zoom.
    Secondary,
    /// Usually the middle mouse button: drag to pan.
    Auxiliary,
    /// Any other button.
    Other(u8),
}

bitflags::bitflags! {
    /// The set of buttons held during a move.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button held.
        const PRIMARY = 1;
        /// Secondary button held.
        const SECONDARY = 1 << 1;
        /// Auxiliary button held.
        const AUXILIARY = 1 << 2;
    }
}

impl From<PointerButton> for PointerButtons {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Primary => Self::PRIMARY,
            PointerButton::Secondary => Self::SECONDARY,
            PointerButton::Auxiliary => Self::AUXILIARY,
            PointerButton::Other(_) => Self::empty(),
        }
    }
}

/// Where the pointer was last seen by the editor.
///
/// Starts far outside any widget so the first press never counts as a repeat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    last: Point,
}

impl PointerTracker {
    /// Position a fresh tracker starts at.
    pub const OFFSCREEN: Point = Point::new(-1000.0, -1000.0);

    /// Last recorded position.
    #[must_use]
    pub fn last(&self) -> Point {
        self.last
    }

    /// Records a press at `pos`, returning the travel since the last position.
    pub fn press(&mut self, pos: Point) -> Vec2 {
        let travel = pos - self.last;
        self.last = pos;
        travel
    }

    /// Travel from the last position to `pos`, without recording it.
    #[must_use]
    pub fn delta(&self, pos: Point) -> Vec2 {
        pos - self.last
    }

    /// Records `pos` as the last position.
    pub fn advance(&mut self, pos: Point) {
        self.last = pos;
    }

    /// Forgets the last position.
    pub fn reset(&mut self) {
        self.last = Self::OFFSCREEN;
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            last: Self::OFFSCREEN,
        }
    }
}
