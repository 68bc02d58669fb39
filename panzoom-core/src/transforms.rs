use crate::geometry::{Point, Size};
use crate::state::ViewState;

/// Scaled content narrower than this fraction of the viewport counts as
/// "smaller than the viewport".
pub const SMALL_CONTENT_RATIO: f64 = 0.9;

/// Maximum fraction of scaled content allowed to leave the viewport.
pub const OFFSCREEN_FRACTION: f64 = 0.1;

/// Symmetric translate limit along one axis.
///
/// Small content may slide across the whole viewport extent; larger content
/// stops once `OFFSCREEN_FRACTION` of it would go off-screen.
pub fn pan_limit(content_extent: f64, scale: f64, viewport_extent: f64) -> f64 {
    let scaled = content_extent * scale;
    if scaled < viewport_extent * SMALL_CONTENT_RATIO {
        viewport_extent
    } else {
        scaled - scaled * OFFSCREEN_FRACTION
    }
}

/// Clamp both translate components into `[-limit, +limit]` for their axis.
pub fn constrain_translation(state: ViewState, content: Size, viewport: Size) -> ViewState {
    let limit_x = pan_limit(content.width, state.scale, viewport.width);
    let limit_y = pan_limit(content.height, state.scale, viewport.height);
    ViewState {
        translate_x: clamp_symmetric(state.translate_x, limit_x),
        translate_y: clamp_symmetric(state.translate_y, limit_y),
        scale: state.scale,
    }
}

/// Change scale to `new_scale` while keeping the graphic point under
/// `anchor` fixed on screen.
pub fn zoom_about(state: ViewState, anchor: Point, new_scale: f64) -> ViewState {
    let local = state.to_local(anchor);
    ViewState {
        translate_x: anchor.x - local.x * new_scale,
        translate_y: anchor.y - local.y * new_scale,
        scale: new_scale,
    }
}

fn clamp_symmetric(value: f64, limit: f64) -> f64 {
    // A non-finite or negative limit means unusable geometry; leave the value alone.
    if !(limit.is_finite() && limit >= 0.0) {
        return value;
    }
    value.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_content_may_use_full_viewport() {
        // 200 * 1.0 = 200 < 0.9 * 400
        assert_eq!(pan_limit(200.0, 1.0, 400.0), 400.0);
    }

    #[test]
    fn large_content_keeps_ninety_percent_visible() {
        // 800 * 1.0 = 800 >= 360, limit = 800 - 80
        assert_eq!(pan_limit(800.0, 1.0, 400.0), 720.0);
        // 800 * 2.0 = 1600, limit = 1600 - 160
        assert_eq!(pan_limit(800.0, 2.0, 400.0), 1440.0);
    }

    #[test]
    fn threshold_is_exclusive() {
        // 360 is exactly 90% of 400: not "smaller", so the scaled rule applies
        assert_eq!(pan_limit(360.0, 1.0, 400.0), 324.0);
    }

    #[test]
    fn constrain_clamps_each_axis_independently() {
        let state = ViewState {
            translate_x: 1000.0,
            translate_y: -1000.0,
            scale: 1.0,
        };
        let constrained =
            constrain_translation(state, Size::new(800.0, 100.0), Size::new(400.0, 300.0));
        assert_eq!(constrained.translate_x, 720.0);
        // height 100 < 270, limit falls back to the viewport height
        assert_eq!(constrained.translate_y, -300.0);
        assert_eq!(constrained.scale, 1.0);
    }

    #[test]
    fn constrain_leaves_in_range_values_alone() {
        let state = ViewState {
            translate_x: 50.0,
            translate_y: 30.0,
            scale: 1.0,
        };
        let constrained =
            constrain_translation(state, Size::new(800.0, 600.0), Size::new(400.0, 300.0));
        assert_eq!(constrained, state);
    }

    #[test]
    fn constrain_is_idempotent() {
        let state = ViewState {
            translate_x: -5000.0,
            translate_y: 777.0,
            scale: 3.3,
        };
        let content = Size::new(640.0, 480.0);
        let viewport = Size::new(400.0, 300.0);
        let once = constrain_translation(state, content, viewport);
        let twice = constrain_translation(once, content, viewport);
        assert_eq!(once, twice);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let state = ViewState {
            translate_x: 12.0,
            translate_y: -7.0,
            scale: 1.5,
        };
        let anchor = Point::new(180.0, 95.0);
        let before = state.to_local(anchor);
        let after = zoom_about(state, anchor, 2.7).to_local(anchor);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_about_origin_only_scales() {
        let zoomed = zoom_about(ViewState::IDENTITY, Point::new(0.0, 0.0), 2.0);
        assert_eq!(
            zoomed,
            ViewState {
                translate_x: 0.0,
                translate_y: 0.0,
                scale: 2.0
            }
        );
    }
}
