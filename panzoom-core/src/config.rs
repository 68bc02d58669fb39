//! Viewer configuration.
//!
//! Options arrive from the host page as a loosely-typed object. Every field is
//! optional; missing fields take their defaults and unknown fields are ignored.
//! After parsing, [`PanZoomConfig::normalized`] repairs values that would break
//! the engine's invariants.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MIN_SCALE: f64 = 0.9;
pub const DEFAULT_MAX_SCALE: f64 = 5.0;
pub const DEFAULT_ZOOM_STEP: f64 = 0.3;
pub const DEFAULT_TRANSITION_MS: f64 = 200.0;

/// Corner of the viewport the button cluster is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlsPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlsPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlsPosition::TopLeft => "top-left",
            ControlsPosition::TopRight => "top-right",
            ControlsPosition::BottomLeft => "bottom-left",
            ControlsPosition::BottomRight => "bottom-right",
        }
    }
}

/// Immutable configuration supplied at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanZoomConfig {
    /// Lower clamp bound for scale
    pub min_scale: f64,
    /// Upper clamp bound for scale
    pub max_scale: f64,
    /// Scale change per discrete zoom action (wheel tick, button, key)
    pub zoom_step: f64,
    /// Duration in ms of animated transform application. Page scripts may
    /// pass any number; [`PanZoomConfig::transition_ms`] gives the usable value.
    pub transition_duration: f64,
    pub show_controls: bool,
    pub controls_position: ControlsPosition,
    pub enable_touch: bool,
    pub enable_keyboard: bool,
    pub show_zoom_level_indicator: bool,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
            transition_duration: DEFAULT_TRANSITION_MS,
            show_controls: true,
            controls_position: ControlsPosition::default(),
            enable_touch: true,
            enable_keyboard: true,
            show_zoom_level_indicator: true,
        }
    }
}

impl PanZoomConfig {
    /// Parse options from a JSON document and normalize them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PanZoomConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Repair values that would violate `0 < min_scale <= max_scale` or a
    /// positive zoom step. Each repair is logged.
    pub fn normalized(mut self) -> Self {
        if !is_positive(self.min_scale) {
            log::warn!(
                "minScale {} is not a positive number, using {}",
                self.min_scale,
                DEFAULT_MIN_SCALE
            );
            self.min_scale = DEFAULT_MIN_SCALE;
        }
        if !is_positive(self.max_scale) {
            log::warn!(
                "maxScale {} is not a positive number, using {}",
                self.max_scale,
                DEFAULT_MAX_SCALE
            );
            self.max_scale = DEFAULT_MAX_SCALE;
        }
        if self.min_scale > self.max_scale {
            log::warn!(
                "minScale {} exceeds maxScale {}, swapping",
                self.min_scale,
                self.max_scale
            );
            std::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        if !is_positive(self.zoom_step) {
            log::warn!(
                "zoomStep {} is not a positive number, using {}",
                self.zoom_step,
                DEFAULT_ZOOM_STEP
            );
            self.zoom_step = DEFAULT_ZOOM_STEP;
        }
        if !(self.transition_duration.is_finite() && self.transition_duration >= 0.0) {
            log::warn!(
                "transitionDuration {} is not a non-negative number, using {}",
                self.transition_duration,
                DEFAULT_TRANSITION_MS
            );
            self.transition_duration = DEFAULT_TRANSITION_MS;
        }
        self.transition_duration = self.transition_duration.round().min(f64::from(u32::MAX));
        self
    }

    /// Transition duration in whole milliseconds.
    pub fn transition_ms(&self) -> u32 {
        // Saturating cast: NaN maps to 0, out-of-range values clamp.
        self.transition_duration.round() as u32
    }

    /// Clamp a scale into `[min_scale, max_scale]`.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = PanZoomConfig::from_json("{}").unwrap();
        assert_eq!(config, PanZoomConfig::default());
    }

    #[test]
    fn camel_case_options_are_read() {
        let config = PanZoomConfig::from_json(
            r#"{
                "minScale": 0.9,
                "maxScale": 5,
                "zoomStep": 0.3,
                "transitionDuration": 150,
                "showControls": false,
                "controlsPosition": "bottom-left",
                "enableTouch": false,
                "enableKeyboard": false,
                "showZoomLevelIndicator": false
            }"#,
        )
        .unwrap();

        assert_eq!(config.min_scale, 0.9);
        assert_eq!(config.max_scale, 5.0);
        assert_eq!(config.zoom_step, 0.3);
        assert_eq!(config.transition_duration, 150.0);
        assert!(!config.show_controls);
        assert_eq!(config.controls_position, ControlsPosition::BottomLeft);
        assert!(!config.enable_touch);
        assert!(!config.enable_keyboard);
        assert!(!config.show_zoom_level_indicator);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = PanZoomConfig::from_json(r#"{"zoomStep": 0.2, "theme": "dark"}"#).unwrap();
        assert_eq!(config.zoom_step, 0.2);
    }

    #[test]
    fn malformed_options_are_an_error() {
        assert!(PanZoomConfig::from_json(r#"{"controlsPosition": "middle"}"#).is_err());
        assert!(PanZoomConfig::from_json(r#"{"zoomStep": "big"}"#).is_err());
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = PanZoomConfig::default();
        assert_eq!(config.min_scale, 0.9);
        assert_eq!(config.max_scale, 5.0);
        assert_eq!(config.zoom_step, 0.3);
        assert_eq!(config.transition_ms(), 200);
        assert_eq!(config.controls_position, ControlsPosition::TopRight);
    }

    #[test]
    fn fractional_transition_is_rounded_not_rejected() {
        let config =
            PanZoomConfig::from_json(r#"{"transitionDuration": 150.5, "zoomStep": 0.2}"#).unwrap();
        assert_eq!(config.transition_ms(), 151);
        assert_eq!(config.zoom_step, 0.2);
    }

    #[test]
    fn negative_transition_falls_back_to_default() {
        let config =
            PanZoomConfig::from_json(r#"{"transitionDuration": -5, "minScale": 0.5}"#).unwrap();
        assert_eq!(config.transition_duration, DEFAULT_TRANSITION_MS);
        assert_eq!(config.min_scale, 0.5);
    }

    #[test]
    fn swapped_scale_bounds_are_reordered() {
        let config = PanZoomConfig {
            min_scale: 4.0,
            max_scale: 0.25,
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.min_scale, 0.25);
        assert_eq!(config.max_scale, 4.0);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = PanZoomConfig {
            min_scale: -1.0,
            max_scale: f64::NAN,
            zoom_step: 0.0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.min_scale, DEFAULT_MIN_SCALE);
        assert_eq!(config.max_scale, DEFAULT_MAX_SCALE);
        assert_eq!(config.zoom_step, DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn clamp_scale_respects_bounds() {
        let config = PanZoomConfig {
            min_scale: 0.9,
            max_scale: 5.0,
            ..Default::default()
        };
        assert_eq!(config.clamp_scale(0.1), 0.9);
        assert_eq!(config.clamp_scale(7.0), 5.0);
        assert_eq!(config.clamp_scale(2.0), 2.0);
    }
}
