//! On-screen control actions.

use crate::config::ControlsPosition;
use crate::engine::ViewportEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    ZoomIn,
    ZoomOut,
    Reset,
    ToggleFullscreen,
}

impl ControlAction {
    /// Buttons in display order. Fullscreen leads the cluster, and only when
    /// the platform supports it.
    pub fn cluster(fullscreen_supported: bool) -> Vec<ControlAction> {
        let mut actions = Vec::with_capacity(4);
        if fullscreen_supported {
            actions.push(ControlAction::ToggleFullscreen);
        }
        actions.extend([ControlAction::ZoomIn, ControlAction::ZoomOut, ControlAction::Reset]);
        actions
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlAction::ZoomIn => "+",
            ControlAction::ZoomOut => "\u{2212}",
            ControlAction::Reset => "\u{2302}",
            ControlAction::ToggleFullscreen => "\u{26F6}",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ControlAction::ZoomIn => "Zoom In",
            ControlAction::ZoomOut => "Zoom Out",
            ControlAction::Reset => "Reset Zoom",
            ControlAction::ToggleFullscreen => "Toggle Fullscreen",
        }
    }

    /// Run the action against the engine. Fullscreen is a platform concern and
    /// is not handled here; returns `false` for it.
    pub fn apply(self, engine: &ViewportEngine) -> bool {
        match self {
            ControlAction::ZoomIn => {
                engine.zoom_in();
            }
            ControlAction::ZoomOut => {
                engine.zoom_out();
            }
            ControlAction::Reset => engine.reset(),
            ControlAction::ToggleFullscreen => return false,
        }
        true
    }
}

/// CSS class list for the controls container.
pub fn controls_class(position: ControlsPosition) -> String {
    format!("panzoom-controls panzoom-controls--{}", position.as_str())
}
