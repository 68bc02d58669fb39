// panzoom-ui/src/dom/scheduler.rs
use gloo_timers::callback::Timeout;
use panzoom_core::{PendingTask, Scheduler};

/// `setTimeout`-backed scheduler. Dropping the returned task clears the timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> PendingTask {
        let timeout = Timeout::new(delay_ms, task);
        PendingTask::new(move || drop(timeout))
    }
}
