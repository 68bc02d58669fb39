//! Touch panning and pinch zoom.

use crate::engine::ViewportEngine;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchMode {
    Idle,
    /// One finger down, with its last position
    Panning { last: Point },
    /// Two fingers down, with their last separation
    Pinching { distance: f64 },
}

/// Scale change for one pinch sample.
///
/// The ratio is taken against the previous sample, not the gesture start.
pub fn pinch_scale_delta(previous_distance: f64, current_distance: f64, scale: f64) -> f64 {
    (current_distance / previous_distance - 1.0) * scale
}

/// Tracks active touches and turns their motion into pans and pinch zooms.
///
/// Whenever the number of touches changes, tracking restarts from the current
/// positions and that sample applies no transform.
#[derive(Debug)]
pub struct TouchTracker {
    engine: ViewportEngine,
    mode: TouchMode,
}

impl TouchTracker {
    pub fn new(engine: ViewportEngine) -> Self {
        Self {
            engine,
            mode: TouchMode::Idle,
        }
    }

    pub fn mode(&self) -> TouchMode {
        self.mode
    }

    /// Touches began (or the set of touches changed). `touches` are all
    /// currently active contact points.
    pub fn start(&mut self, touches: &[Point]) {
        self.mode = if self.engine.is_live() {
            latch(touches)
        } else {
            TouchMode::Idle
        };
    }

    /// Active touches moved. Returns `true` if a transform was applied.
    pub fn move_to(&mut self, touches: &[Point]) -> bool {
        if !self.engine.is_live() {
            self.mode = TouchMode::Idle;
            return false;
        }

        match (self.mode, touches) {
            (TouchMode::Panning { last }, [current]) => {
                self.mode = TouchMode::Panning { last: *current };
                self.engine.pan_by(current.x - last.x, current.y - last.y);
                true
            }
            (TouchMode::Pinching { distance: previous }, [a, b]) => {
                let current = a.distance(b);
                self.mode = TouchMode::Pinching { distance: current };
                if previous <= 0.0 || !current.is_finite() {
                    return false;
                }
                let delta = pinch_scale_delta(previous, current, self.engine.state().scale);
                let anchor = a.midpoint(b);
                self.engine.zoom_at(anchor.x, anchor.y, delta)
            }
            _ => {
                self.mode = latch(touches);
                false
            }
        }
    }

    /// Some touches ended. `remaining` are the touches still active.
    pub fn end(&mut self, remaining: &[Point]) {
        self.start(remaining);
    }
}

fn latch(touches: &[Point]) -> TouchMode {
    match touches {
        [only] => TouchMode::Panning { last: *only },
        [a, b] => TouchMode::Pinching {
            distance: a.distance(b),
        },
        _ => TouchMode::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanZoomConfig;
    use crate::geometry::Size;
    use crate::testing::{ManualScheduler, RecordingSurface};
    use std::rc::Rc;

    fn tracker() -> TouchTracker {
        let surface = Rc::new(RecordingSurface::new(
            Size::new(400.0, 300.0),
            Size::new(800.0, 600.0),
        ));
        let engine = ViewportEngine::new(
            PanZoomConfig {
                min_scale: 0.5,
                max_scale: 10.0,
                ..Default::default()
            },
            Some(surface),
            Rc::new(ManualScheduler::new()),
        );
        engine.initialize();
        TouchTracker::new(engine)
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn scale_delta_formula() {
        assert_eq!(pinch_scale_delta(100.0, 150.0, 2.0), 1.0);
        assert_eq!(pinch_scale_delta(100.0, 50.0, 1.0), -0.5);
    }

    #[test]
    fn single_touch_pans_incrementally() {
        let mut touch = tracker();
        touch.start(&[p(10.0, 10.0)]);
        assert!(touch.move_to(&[p(30.0, 15.0)]));
        assert!(touch.move_to(&[p(35.0, 25.0)]));
        let state = touch.engine.state();
        assert_eq!((state.translate_x, state.translate_y), (25.0, 15.0));
    }

    #[test]
    fn pinch_routes_delta_through_zoom_at_midpoint() {
        let mut touch = tracker();
        touch.engine.zoom_at(0.0, 0.0, 1.0);
        assert_eq!(touch.engine.state().scale, 2.0);

        // Fingers 100px apart, spreading to 150px around (200, 150)
        touch.start(&[p(150.0, 150.0), p(250.0, 150.0)]);
        let anchor = p(200.0, 150.0);
        let local_before = touch.engine.state().to_local(anchor);

        assert!(touch.move_to(&[p(125.0, 150.0), p(275.0, 150.0)]));
        let state = touch.engine.state();
        assert!((state.scale - 3.0).abs() < 1e-12);
        let local_after = state.to_local(anchor);
        assert!((local_before.x - local_after.x).abs() < 1e-9);
        assert!((local_before.y - local_after.y).abs() < 1e-9);
    }

    #[test]
    fn pinch_ratio_uses_previous_sample() {
        let mut touch = tracker();
        touch.start(&[p(0.0, 0.0), p(100.0, 0.0)]);
        // 100 -> 200: delta = (2 - 1) * 1 = 1 -> scale 2
        touch.move_to(&[p(0.0, 0.0), p(200.0, 0.0)]);
        assert!((touch.engine.state().scale - 2.0).abs() < 1e-12);
        // 200 -> 300: delta = (1.5 - 1) * 2 = 1 -> scale 3
        touch.move_to(&[p(0.0, 0.0), p(300.0, 0.0)]);
        assert!((touch.engine.state().scale - 3.0).abs() < 1e-12);
        assert_eq!(touch.mode(), TouchMode::Pinching { distance: 300.0 });
    }

    #[test]
    fn count_change_relatches_without_transform() {
        let mut touch = tracker();
        touch.start(&[p(0.0, 0.0)]);
        touch.move_to(&[p(5.0, 0.0)]);
        let before = touch.engine.state();

        // Second finger appears mid-move: 1 -> 2
        assert!(!touch.move_to(&[p(5.0, 0.0), p(105.0, 0.0)]));
        assert_eq!(touch.engine.state(), before);
        assert_eq!(touch.mode(), TouchMode::Pinching { distance: 100.0 });

        // One finger lifts: 2 -> 1
        touch.end(&[p(105.0, 0.0)]);
        assert_eq!(touch.mode(), TouchMode::Panning { last: p(105.0, 0.0) });
        assert!(!touch.move_to(&[p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)]));
        assert_eq!(touch.mode(), TouchMode::Idle);
        assert_eq!(touch.engine.state(), before);
    }

    #[test]
    fn zero_distance_pinch_is_ignored() {
        let mut touch = tracker();
        touch.start(&[p(10.0, 10.0), p(10.0, 10.0)]);
        assert!(!touch.move_to(&[p(0.0, 10.0), p(20.0, 10.0)]));
        assert_eq!(touch.engine.state().scale, 1.0);
        assert_eq!(touch.mode(), TouchMode::Pinching { distance: 20.0 });
    }

    #[test]
    fn all_touches_ended_is_idle() {
        let mut touch = tracker();
        touch.start(&[p(0.0, 0.0)]);
        touch.end(&[]);
        assert_eq!(touch.mode(), TouchMode::Idle);
    }
}
