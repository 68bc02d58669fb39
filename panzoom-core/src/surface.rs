//! Platform seams: where the engine draws and how it schedules deferred work.

use std::fmt;

use crate::bounds::ContentBounds;
use crate::geometry::Size;
use crate::state::ViewState;

/// The rendered graphic inside its viewport container.
pub trait Surface {
    /// Current size of the viewport container.
    fn viewport_size(&self) -> Size;

    /// Intrinsic content size, resolved fresh on every call.
    fn content_bounds(&self) -> ContentBounds;

    /// Enable a transform transition of `duration_ms`, or disable it with `None`.
    fn set_transition(&self, duration_ms: Option<u32>);

    /// Write the transform onto the graphic.
    fn set_transform(&self, state: &ViewState);
}

/// One-shot deferred task runner.
pub trait Scheduler {
    /// Run `task` after `delay_ms`. Dropping the returned handle cancels it.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> PendingTask;
}

/// Handle to a scheduled task. Cancels the task when dropped.
pub struct PendingTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl PendingTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for PendingTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for PendingTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTask").finish_non_exhaustive()
    }
}
