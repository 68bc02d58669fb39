//! Keyboard shortcuts.

use crate::engine::ViewportEngine;

/// Pixels moved per arrow key press.
pub const ARROW_STEP: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ArrowDirection {
    /// Translation for one step in this direction. The arrow moves the
    /// camera, so content shifts the opposite way: `ArrowUp` raises
    /// `translate_y` and `ArrowLeft` raises `translate_x`.
    pub fn offset(self, step: f64) -> (f64, f64) {
        match self {
            ArrowDirection::Left => (step, 0.0),
            ArrowDirection::Right => (-step, 0.0),
            ArrowDirection::Up => (0.0, step),
            ArrowDirection::Down => (0.0, -step),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ZoomIn,
    ZoomOut,
    Reset,
    Arrow(ArrowDirection),
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        let action = match key {
            "+" | "=" => KeyAction::ZoomIn,
            "-" => KeyAction::ZoomOut,
            "0" => KeyAction::Reset,
            "ArrowLeft" => KeyAction::Arrow(ArrowDirection::Left),
            "ArrowRight" => KeyAction::Arrow(ArrowDirection::Right),
            "ArrowUp" => KeyAction::Arrow(ArrowDirection::Up),
            "ArrowDown" => KeyAction::Arrow(ArrowDirection::Down),
            _ => return None,
        };
        Some(action)
    }

    pub fn apply(self, engine: &ViewportEngine) {
        match self {
            KeyAction::ZoomIn => {
                engine.zoom_in();
            }
            KeyAction::ZoomOut => {
                engine.zoom_out();
            }
            KeyAction::Reset => engine.reset(),
            KeyAction::Arrow(direction) => {
                let (dx, dy) = direction.offset(ARROW_STEP);
                engine.nudge(dx, dy);
            }
        }
    }
}

/// Handle a key press. Returns `true` if the key is bound, in which case the
/// platform default should be prevented.
pub fn handle_key(engine: &ViewportEngine, key: &str) -> bool {
    if !engine.is_live() {
        return false;
    }
    match KeyAction::from_key(key) {
        Some(action) => {
            action.apply(engine);
            true
        }
        None => false,
    }
}
