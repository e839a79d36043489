// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window intersection tests for pickable shapes.
//!
//! A pick window is a small axis-aligned square around the pointer, in
//! screen pixels. A shape is hit when any part of its geometry lies inside
//! the window, edges included. Points are treated as dimensionless and lines
//! as zero-width segments; the window size is the only tolerance.

use kurbo::{Line, Point, Rect};

/// A shape that can be tested against a pick window.
pub trait WindowHit {
    /// Returns `true` if the shape intersects `window`.
    fn hits_window(&self, window: Rect) -> bool;
}

impl WindowHit for Point {
    fn hits_window(&self, window: Rect) -> bool {
        self.x >= window.x0 && self.x <= window.x1 && self.y >= window.y0 && self.y <= window.y1
    }
}

impl WindowHit for Line {
    /// Liang–Barsky clip of the segment against the window.
    fn hits_window(&self, window: Rect) -> bool {
        let d = self.p1 - self.p0;
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        let edges = [
            (-d.x, self.p0.x - window.x0),
            (d.x, window.x1 - self.p0.x),
            (-d.y, self.p0.y - window.y0),
            (d.y, window.y1 - self.p0.y),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                // Parallel to this boundary: inside or never.
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return false;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return false;
                }
                t1 = t1.min(t);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Line, Point, Rect};

    use super::WindowHit;

    fn window() -> Rect {
        Rect::from_center_size((0.0, 0.0), (8.0, 8.0))
    }

    #[test]
    fn point_inside_and_on_the_border() {
        assert!(Point::new(0.0, 0.0).hits_window(window()));
        assert!(Point::new(4.0, -4.0).hits_window(window()));
        assert!(!Point::new(4.01, 0.0).hits_window(window()));
    }

    #[test]
    fn segment_crossing_without_endpoints_inside() {
        let crossing = Line::new((-10.0, 1.0), (10.0, 1.0));
        let diagonal = Line::new((-10.0, -10.0), (10.0, 10.0));
        assert!(crossing.hits_window(window()));
        assert!(diagonal.hits_window(window()));
    }

    #[test]
    fn segment_that_stops_short_or_passes_by() {
        let short = Line::new((-10.0, 0.0), (-5.0, 0.0));
        let above = Line::new((-10.0, 6.0), (10.0, 6.0));
        let corner_miss = Line::new((3.0, 10.0), (10.0, 3.0));
        assert!(!short.hits_window(window()));
        assert!(!above.hits_window(window()));
        assert!(!corner_miss.hits_window(window()));
    }

    #[test]
    fn degenerate_segment_behaves_like_a_point() {
        let inside = Line::new((1.0, 1.0), (1.0, 1.0));
        let outside = Line::new((9.0, 9.0), (9.0, 9.0));
        assert!(inside.hits_window(window()));
        assert!(!outside.hits_window(window()));
    }
}
