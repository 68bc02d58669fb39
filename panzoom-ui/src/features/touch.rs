// panzoom-ui/src/features/touch.rs
use std::cell::RefCell;
use std::rc::Rc;

use panzoom_core::input::TouchTracker;
use panzoom_core::{Feature, FeatureError, FeatureKind, Point, ViewportEngine};
use web_sys::{HtmlElement, SvgElement, TouchEvent, TouchList};

use crate::dom::{local_point, EventListener};

/// One-finger panning and two-finger pinch zoom.
///
/// Gestures are observed on the graphic; contact points are measured
/// relative to the container.
pub struct TouchFeature {
    engine: ViewportEngine,
    container: HtmlElement,
    graphic: SvgElement,
    listeners: Vec<EventListener>,
}

impl TouchFeature {
    pub fn new(engine: ViewportEngine, container: HtmlElement, graphic: SvgElement) -> Self {
        Self {
            engine,
            container,
            graphic,
            listeners: Vec::new(),
        }
    }
}

fn contact_points(container: &HtmlElement, list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| local_point(container, t.client_x(), t.client_y()))
        .collect()
}

impl Feature for TouchFeature {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Touch
    }

    fn initialize(&mut self) -> Result<(), FeatureError> {
        let tracker = Rc::new(RefCell::new(TouchTracker::new(self.engine.clone())));

        let start = {
            let tracker = tracker.clone();
            let container = self.container.clone();
            EventListener::new(&self.graphic, "touchstart", false, move |e: TouchEvent| {
                let touches = contact_points(&container, &e.touches());
                if let Ok(mut tracker) = tracker.try_borrow_mut() {
                    tracker.start(&touches);
                }
                e.prevent_default();
            })?
        };

        let movement = {
            let tracker = tracker.clone();
            let container = self.container.clone();
            EventListener::new(&self.graphic, "touchmove", false, move |e: TouchEvent| {
                let touches = contact_points(&container, &e.touches());
                if let Ok(mut tracker) = tracker.try_borrow_mut() {
                    tracker.move_to(&touches);
                }
                // Keep the page from scrolling or zooming under the gesture.
                e.prevent_default();
            })?
        };

        let mut listeners = vec![start, movement];
        for event in ["touchend", "touchcancel"] {
            let tracker = tracker.clone();
            let container = self.container.clone();
            listeners.push(EventListener::new(
                &self.graphic,
                event,
                false,
                move |e: TouchEvent| {
                    let remaining = contact_points(&container, &e.touches());
                    if let Ok(mut tracker) = tracker.try_borrow_mut() {
                        tracker.end(&remaining);
                    }
                },
            )?);
        }

        self.listeners = listeners;
        Ok(())
    }

    fn destroy(&mut self) {
        self.listeners.clear();
    }
}
