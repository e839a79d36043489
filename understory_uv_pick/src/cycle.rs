// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::{PickHits, PickName, PickPass};

/// Repeat-click counter for stepping through stacked primitives.
///
/// Each press reports the pointer travel since the previous pointer position.
/// A press within `radius` (Manhattan distance, exclusive) of it advances the
/// counter; anything farther resets it to zero. The counter is not tied to
/// what was hit, so alternating between two nearby stacks shares one count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectCycle {
    count: usize,
    radius: f64,
}

impl SelectCycle {
    /// Creates a counter at zero with the given repeat radius in pixels.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { count: 0, radius }
    }

    /// Current count.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Repeat radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Registers a press that moved `travel` pixels from the last pointer position.
    pub fn press(&mut self, travel: Vec2) {
        if travel.x.abs() + travel.y.abs() < self.radius {
            self.count = self.count.wrapping_add(1);
        } else {
            self.count = 0;
        }
    }

    /// Resets the counter to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Selects among `hits` using the current count.
    #[must_use]
    pub fn choose(&self, hits: &PickHits) -> Option<PickName> {
        hits.cycled(self.count)
    }
}

impl Default for SelectCycle {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CYCLE_RADIUS)
    }
}

/// Window hit testing plus repeat-click cycling.
///
/// The resolver does not know what is being picked. [`PickResolver::pick_at`]
/// hands the caller a [`PickPass`] to replay its primitives into, then
/// applies the cycle rule to the sorted hits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickResolver {
    tolerance: f64,
    cycle: SelectCycle,
}

impl PickResolver {
    /// Creates a resolver with a `tolerance`-pixel square window and a
    /// `cycle_radius`-pixel repeat radius.
    #[must_use]
    pub const fn new(tolerance: f64, cycle_radius: f64) -> Self {
        Self {
            tolerance,
            cycle: SelectCycle::new(cycle_radius),
        }
    }

    /// Side of the pick window in pixels.
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The repeat-click counter.
    #[must_use]
    pub const fn cycle(&self) -> &SelectCycle {
        &self.cycle
    }

    /// Registers a press; see [`SelectCycle::press`].
    pub fn press(&mut self, travel: Vec2) {
        self.cycle.press(travel);
    }

    /// Runs a hit pass around `at` and returns the cycled hit, if any.
    pub fn pick_at(&self, at: Point, draw: impl FnOnce(&mut PickPass)) -> Option<PickName> {
        self.cycle.choose(&self.hits_at(at, draw))
    }

    /// Runs a hit pass around `at` and returns every hit, sorted.
    pub fn hits_at(&self, at: Point, draw: impl FnOnce(&mut PickPass)) -> PickHits {
        let mut pass = PickPass::new(at, self.tolerance);
        draw(&mut pass);
        pass.finish()
    }
}

impl Default for PickResolver {
    fn default() -> Self {
        Self::new(crate::DEFAULT_TOLERANCE, crate::DEFAULT_CYCLE_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{PickResolver, SelectCycle};
    use crate::PickName;

    #[test]
    fn nearby_presses_advance_and_far_presses_reset() {
        let mut cycle = SelectCycle::new(4.0);
        cycle.press(Vec2::new(100.0, 0.0));
        assert_eq!(cycle.count(), 0);
        cycle.press(Vec2::new(1.0, 2.0));
        assert_eq!(cycle.count(), 1);
        cycle.press(Vec2::ZERO);
        assert_eq!(cycle.count(), 2);
        // Manhattan length exactly at the radius resets.
        cycle.press(Vec2::new(2.0, -2.0));
        assert_eq!(cycle.count(), 0);
    }

    #[test]
    fn resolver_cycles_through_stacked_points() {
        let mut resolver = PickResolver::default();
        let at = Point::new(20.0, 20.0);
        let draw = |pass: &mut super::PickPass| {
            for raw in [3, 1, 2] {
                pass.point(PickName::new(raw).unwrap(), at);
            }
        };

        resolver.press(Vec2::new(50.0, 50.0));
        assert_eq!(resolver.pick_at(at, draw), PickName::new(1));
        resolver.press(Vec2::ZERO);
        assert_eq!(resolver.pick_at(at, draw), PickName::new(2));
        resolver.press(Vec2::ZERO);
        assert_eq!(resolver.pick_at(at, draw), PickName::new(3));
        resolver.press(Vec2::ZERO);
        assert_eq!(resolver.pick_at(at, draw), PickName::new(1));
    }

    #[test]
    fn miss_is_none() {
        let resolver = PickResolver::default();
        let picked = resolver.pick_at(Point::ZERO, |pass| {
            pass.point(PickName::new(1).unwrap(), Point::new(100.0, 100.0));
        });
        assert_eq!(picked, None);
    }
}
