use crate::engine::ViewportEngine;

/// Treat one wheel event as one discrete zoom tick at `(x, y)`.
///
/// Scrolling down (`delta_y > 0`) zooms out; the magnitude of the delta is
/// ignored and every tick uses the configured zoom step. Returns `true` when
/// the event was consumed and its default scrolling should be suppressed.
pub fn wheel_zoom(engine: &ViewportEngine, x: f64, y: f64, delta_y: f64) -> bool {
    if !engine.is_live() || delta_y == 0.0 || !delta_y.is_finite() {
        return false;
    }
    let step = engine.config().zoom_step;
    let delta = if delta_y > 0.0 { -step } else { step };
    engine.zoom_at(x, y, delta);
    true
}
