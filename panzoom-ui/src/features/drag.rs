// panzoom-ui/src/features/drag.rs
use std::cell::RefCell;
use std::rc::Rc;

use panzoom_core::input::DragTracker;
use panzoom_core::{Feature, FeatureError, FeatureKind, ViewportEngine};
use web_sys::{HtmlElement, MouseEvent, SvgElement};

use crate::dom::{local_point, EventListener};

/// Pointer drag panning.
///
/// The press is observed on the graphic, so presses on the control buttons
/// never start a drag. Moves and the release are observed on the window so a
/// drag that leaves the viewport still ends.
pub struct DragFeature {
    engine: ViewportEngine,
    container: HtmlElement,
    graphic: SvgElement,
    listeners: Vec<EventListener>,
}

impl DragFeature {
    pub fn new(engine: ViewportEngine, container: HtmlElement, graphic: SvgElement) -> Self {
        Self {
            engine,
            container,
            graphic,
            listeners: Vec::new(),
        }
    }
}

impl Feature for DragFeature {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Drag
    }

    fn initialize(&mut self) -> Result<(), FeatureError> {
        let window = web_sys::window().ok_or(FeatureError::Unsupported("window"))?;
        let tracker = Rc::new(RefCell::new(DragTracker::new(self.engine.clone())));

        let press = {
            let tracker = tracker.clone();
            let container = self.container.clone();
            EventListener::new(&self.graphic, "mousedown", false, move |e: MouseEvent| {
                let at = local_point(&container, e.client_x(), e.client_y());
                if let Ok(mut tracker) = tracker.try_borrow_mut() {
                    // No text selection or native image drag while panning.
                    if tracker.press(at, e.button()) {
                        e.prevent_default();
                    }
                }
            })?
        };

        let movement = {
            let tracker = tracker.clone();
            let container = self.container.clone();
            EventListener::new(&window, "mousemove", true, move |e: MouseEvent| {
                let at = local_point(&container, e.client_x(), e.client_y());
                if let Ok(mut tracker) = tracker.try_borrow_mut() {
                    tracker.move_to(at);
                }
            })?
        };

        let release = EventListener::new(&window, "mouseup", true, move |_: MouseEvent| {
            if let Ok(mut tracker) = tracker.try_borrow_mut() {
                tracker.release();
            }
        })?;

        self.listeners = vec![press, movement, release];
        Ok(())
    }

    fn destroy(&mut self) {
        self.listeners.clear();
    }
}
