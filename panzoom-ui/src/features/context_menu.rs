// panzoom-ui/src/features/context_menu.rs
use panzoom_core::{Feature, FeatureError, FeatureKind};
use web_sys::{Event, HtmlElement};

use crate::dom::EventListener;

/// Suppresses the browser context menu over the viewport.
pub struct ContextMenuFeature {
    container: HtmlElement,
    listener: Option<EventListener>,
}

impl ContextMenuFeature {
    pub fn new(container: HtmlElement) -> Self {
        Self {
            container,
            listener: None,
        }
    }
}

impl Feature for ContextMenuFeature {
    fn kind(&self) -> FeatureKind {
        FeatureKind::ContextMenu
    }

    fn initialize(&mut self) -> Result<(), FeatureError> {
        self.listener = Some(EventListener::new(
            &self.container,
            "contextmenu",
            false,
            |e: Event| e.prevent_default(),
        )?);
        Ok(())
    }

    fn destroy(&mut self) {
        self.listener = None;
    }
}
