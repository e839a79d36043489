// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `ViewportTransform` accumulation and clamping.

use kurbo::{Size, Vec2};
use proptest::prelude::*;
use understory_uv_view::{MAX_ZOOM, MIN_ZOOM, ViewportTransform, compute_view_rect};

#[derive(Clone, Debug)]
enum Step {
    Pan(i16, i16),
    Zoom(f64),
    Resize(u16, u16),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Step::Pan(x, y)),
        (-4.0_f64..4.0).prop_map(Step::Zoom),
        (0_u16..2048, 0_u16..2048).prop_map(|(w, h)| Step::Resize(w, h)),
    ]
}

proptest! {
    #[test]
    fn incremental_steps_match_final_state(steps in prop::collection::vec(step(), 0..64)) {
        let mut vp = ViewportTransform::new(Size::new(512.0, 512.0));
        let mut pan = Vec2::ZERO;
        for step in &steps {
            match *step {
                Step::Pan(x, y) => {
                    let delta = Vec2::new(f64::from(x), f64::from(y));
                    pan += delta;
                    vp.pan_by(delta);
                }
                Step::Zoom(f) => vp.zoom_by(f),
                Step::Resize(w, h) => vp.set_size(Size::new(f64::from(w), f64::from(h))),
            }
        }

        // Integer pixel deltas sum exactly, so order of accumulation is irrelevant.
        prop_assert_eq!(vp.pan(), pan);
        prop_assert_eq!(vp.view_rect(), compute_view_rect(vp.size(), pan, vp.zoom()));
    }

    #[test]
    fn zoom_stays_within_limits(factors in prop::collection::vec(-20.0_f64..20.0, 0..128)) {
        let mut vp = ViewportTransform::new(Size::new(800.0, 600.0));
        for f in factors {
            vp.zoom_by(f);
            prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&vp.zoom()));
        }
    }

    #[test]
    fn view_rect_extent_tracks_aspect_and_zoom(
        w in 1_u16..4096,
        h in 1_u16..4096,
        zoom in 0.1_f64..10.0,
    ) {
        let size = Size::new(f64::from(w), f64::from(h));
        let rect = compute_view_rect(size, Vec2::new(17.0, -3.0), zoom);
        let expected_w = size.width * zoom / 512.0;
        let expected_h = size.height * zoom / 512.0;
        prop_assert!((rect.width() - expected_w).abs() <= 1e-9 * expected_w.max(1.0));
        prop_assert!((rect.height() - expected_h).abs() <= 1e-9 * expected_h.max(1.0));
    }
}
