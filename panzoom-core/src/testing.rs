//! In-memory [`Surface`] and [`Scheduler`] implementations.
//!
//! Useful for driving the engine headless: the surface records what would have
//! been written to the graphic, and the scheduler runs on a virtual clock that
//! only moves when [`ManualScheduler::advance`] is called.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::bounds::{BoundsOrigin, ContentBounds};
use crate::geometry::Size;
use crate::state::ViewState;
use crate::surface::{PendingTask, Scheduler, Surface};

#[derive(Debug)]
pub struct RecordingSurface {
    viewport: Cell<Size>,
    content: Cell<Size>,
    transition: Cell<Option<u32>>,
    transforms: RefCell<Vec<ViewState>>,
}

impl RecordingSurface {
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            viewport: Cell::new(viewport),
            content: Cell::new(content),
            transition: Cell::new(None),
            transforms: RefCell::new(Vec::new()),
        }
    }

    pub fn set_viewport(&self, size: Size) {
        self.viewport.set(size);
    }

    pub fn set_content(&self, size: Size) {
        self.content.set(size);
    }

    /// Transition currently enabled on the graphic.
    pub fn transition(&self) -> Option<u32> {
        self.transition.get()
    }

    /// Every transform written so far, oldest first.
    pub fn transforms(&self) -> Vec<ViewState> {
        self.transforms.borrow().clone()
    }

    pub fn last_transform(&self) -> Option<ViewState> {
        self.transforms.borrow().last().copied()
    }
}

impl Surface for RecordingSurface {
    fn viewport_size(&self) -> Size {
        self.viewport.get()
    }

    fn content_bounds(&self) -> ContentBounds {
        ContentBounds {
            size: self.content.get(),
            origin: BoundsOrigin::BoundingBox,
        }
    }

    fn set_transition(&self, duration_ms: Option<u32>) {
        self.transition.set(duration_ms);
    }

    fn set_transform(&self, state: &ViewState) {
        self.transforms.borrow_mut().push(*state);
    }
}

struct Entry {
    id: u64,
    due: u64,
    task: Box<dyn FnOnce()>,
}

/// Virtual-clock scheduler. Tasks run only inside [`ManualScheduler::advance`],
/// in due-time order (ties in scheduling order).
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<u64>,
    queue: Rc<RefCell<Vec<Entry>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in ms.
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Number of tasks scheduled and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `ms`, running every task that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let earliest = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(index, _)| index);
                earliest.map(|index| queue.remove(index))
            };
            let Some(entry) = next else {
                break;
            };
            self.now.set(entry.due);
            (entry.task)();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> PendingTask {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push(Entry {
            id,
            due: self.now.get() + u64::from(delay_ms),
            task,
        });

        let queue = Rc::clone(&self.queue);
        PendingTask::new(move || queue.borrow_mut().retain(|entry| entry.id != id))
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}
