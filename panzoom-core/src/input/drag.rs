//! Pointer drag panning.

use crate::engine::ViewportEngine;
use crate::geometry::Point;

/// `MouseEvent.button` value of the primary button.
pub const PRIMARY_BUTTON: i16 = 0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    /// Dragging, with the last pointer position seen
    Dragging { last: Point },
}

/// `Idle -> Dragging -> Idle` state machine.
///
/// Deltas are incremental: each move is measured against the previous move,
/// not the press origin, so other inputs changing the translation mid-drag
/// are respected.
#[derive(Debug)]
pub struct DragTracker {
    engine: ViewportEngine,
    state: DragState,
}

impl DragTracker {
    pub fn new(engine: ViewportEngine) -> Self {
        Self {
            engine,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Button pressed. Only the primary button starts a drag.
    /// Returns `true` if a drag started.
    pub fn press(&mut self, at: Point, button: i16) -> bool {
        if button != PRIMARY_BUTTON || !self.engine.is_live() {
            return false;
        }
        self.state = DragState::Dragging { last: at };
        true
    }

    /// Pointer moved. Returns `true` if the view was panned.
    pub fn move_to(&mut self, at: Point) -> bool {
        let DragState::Dragging { last } = self.state else {
            return false;
        };
        self.state = DragState::Dragging { last: at };
        self.engine.pan_by(at.x - last.x, at.y - last.y);
        true
    }

    /// Button released anywhere.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }
}
