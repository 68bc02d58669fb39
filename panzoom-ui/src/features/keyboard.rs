// panzoom-ui/src/features/keyboard.rs
use panzoom_core::input::keyboard::handle_key;
use panzoom_core::{Feature, FeatureError, FeatureKind, ViewportEngine};
use web_sys::{HtmlElement, KeyboardEvent};

use crate::dom::EventListener;

/// Keyboard shortcuts on the focused viewport.
pub struct KeyboardFeature {
    engine: ViewportEngine,
    container: HtmlElement,
    listener: Option<EventListener>,
}

impl KeyboardFeature {
    pub fn new(engine: ViewportEngine, container: HtmlElement) -> Self {
        Self {
            engine,
            container,
            listener: None,
        }
    }
}

impl Feature for KeyboardFeature {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Keyboard
    }

    fn initialize(&mut self) -> Result<(), FeatureError> {
        // Keydown only reaches focusable elements.
        if !self.container.has_attribute("tabindex") {
            self.container.set_tab_index(0);
        }

        let engine = self.engine.clone();
        self.listener = Some(EventListener::new(
            &self.container,
            "keydown",
            false,
            move |e: KeyboardEvent| {
                if handle_key(&engine, &e.key()) {
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
