//! Input interpretation, one module per modality.
//!
//! These turn raw platform input (already converted to viewport coordinates)
//! into engine operations. The browser crate only forwards events here.

pub mod drag;
pub mod keyboard;
pub mod touch;
pub mod wheel;

pub use drag::{DragState, DragTracker, PRIMARY_BUTTON};
pub use keyboard::{ArrowDirection, KeyAction, ARROW_STEP};
pub use touch::{pinch_scale_delta, TouchMode, TouchTracker};
pub use wheel::wheel_zoom;
