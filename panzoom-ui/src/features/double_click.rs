// panzoom-ui/src/features/double_click.rs
use panzoom_core::{Feature, FeatureError, FeatureKind, ViewportEngine};
use web_sys::{EventTarget, MouseEvent};

use crate::dom::EventListener;

/// Double-click on the graphic resets the view.
pub struct DoubleClickFeature {
    engine: ViewportEngine,
    graphic: EventTarget,
    listener: Option<EventListener>,
}

impl DoubleClickFeature {
    pub fn new(engine: ViewportEngine, graphic: EventTarget) -> Self {
        Self {
            engine,
            graphic,
            listener: None,
        }
    }
}

impl Feature for DoubleClickFeature {
    fn kind(&self) -> FeatureKind {
        FeatureKind::DoubleClick
    }

    fn initialize(&mut self) -> Result<(), FeatureError> {
        let engine = self.engine.clone();
        self.listener = Some(EventListener::new(
            &self.graphic,
            "dblclick",
            true,
            move |_: MouseEvent| engine.reset(),
        )?);
        Ok(())
    }

    fn destroy(&mut self) {
        self.listener = None;
    }
}
