// panzoom-ui/src/features/wheel.rs
use panzoom_core::input::wheel_zoom;
use panzoom_core::{Feature, FeatureError, FeatureKind, ViewportEngine};
use web_sys::{HtmlElement, WheelEvent};

use crate::dom::{local_point, EventListener};

/// Wheel zoom anchored at the pointer.
pub struct WheelFeature {
    engine: ViewportEngine,
    container: HtmlElement,
    listener: Option<EventListener>,
}

impl WheelFeature {
    pub fn new(engine: ViewportEngine, container: HtmlElement) -> Self {
        Self {
            engine,
            container,
            listener: None,
        }
    }
}

impl Feature for WheelFeature {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Wheel
    }

    fn initialize(&mut self) -> Result<(), FeatureError> {
        let engine = self.engine.clone();
        let container = self.container.clone();
        // Non-passive so the page does not scroll underneath.
        self.listener = Some(EventListener::new(
            &self.container,
            "wheel",
            false,
            move |e: WheelEvent| {
                let at = local_point(&container, e.client_x(), e.client_y());
                if wheel_zoom(&engine, at.x, at.y, e.delta_y()) {
                    e.prevent_default();
                }
            },
        )?);
        Ok(())
    }

    fn destroy(&mut self) {
        self.listener = None;
    }
}
