use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Transform applied to the graphic: `translate(translate_x, translate_y) scale(scale)`.
///
/// This is also the payload of every emitted event, serialized as
/// `{ "translateX": .., "translateY": .., "scale": .. }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl ViewState {
    /// Initial state: no offset, no magnification.
    pub const IDENTITY: ViewState = ViewState {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Converts a viewport point into graphic-local coordinates.
    pub fn to_local(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translate_x) / self.scale,
            (screen.y - self.translate_y) / self.scale,
        )
    }

    /// Converts a graphic-local point into viewport coordinates.
    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(
            local.x * self.scale + self.translate_x,
            local.y * self.scale + self.translate_y,
        )
    }

    /// CSS `transform` value for this state.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_and_screen_are_inverse() {
        let state = ViewState {
            translate_x: 35.0,
            translate_y: -20.0,
            scale: 2.5,
        };
        let screen = Point::new(120.0, 80.0);
        let back = state.to_screen(state.to_local(screen));
        assert!((back.x - screen.x).abs() < 1e-9);
        assert!((back.y - screen.y).abs() < 1e-9);
    }

    #[test]
    fn css_transform_format() {
        let state = ViewState {
            translate_x: 10.0,
            translate_y: -5.5,
            scale: 1.3,
        };
        assert_eq!(state.css_transform(), "translate(10px, -5.5px) scale(1.3)");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ViewState::IDENTITY).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "translateX": 0.0, "translateY": 0.0, "scale": 1.0 })
        );
    }
}
