// panzoom-ui/src/features/controls.rs
use panzoom_core::{controls_class, ControlAction, Feature, FeatureError, FeatureKind, ViewportEngine};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::fullscreen;
use crate::dom::{document, EventListener};

/// The on-screen button cluster. Owns the fullscreen toggle when the
/// platform supports it.
pub struct ControlsFeature {
    engine: ViewportEngine,
    container: HtmlElement,
    cluster: Option<HtmlElement>,
    listeners: Vec<EventListener>,
}

impl ControlsFeature {
    pub fn new(engine: ViewportEngine, container: HtmlElement) -> Self {
        Self {
            engine,
            container,
            cluster: None,
            listeners: Vec::new(),
        }
    }

    fn button(
        &self,
        document: &Document,
        action: ControlAction,
    ) -> Result<(HtmlElement, EventListener), FeatureError> {
        let button = create_html(document, "button")?;
        button.set_class_name("panzoom-control");
        button.set_text_content(Some(action.label()));
        button.set_title(action.title());
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("aria-label", action.title());

        let engine = self.engine.clone();
        let container = self.container.clone();
        let listener = EventListener::new(&button, "click", true, move |e: MouseEvent| {
            e.stop_propagation();
            if !engine.is_live() {
                return;
            }
            if !action.apply(&engine) {
                fullscreen::toggle_fullscreen(&container);
            }
        })?;
        Ok((button, listener))
    }
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, FeatureError> {
    document
        .create_element(tag)
        .map_err(|e| FeatureError::Element(format!("{:?}", e)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| FeatureError::Element(format!("<{}> is not an HtmlElement", tag)))
}

impl Feature for ControlsFeature {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Controls
    }

    fn initialize(&mut self) -> Result<(), FeatureError> {
        let document = document().ok_or(FeatureError::Unsupported("document"))?;
        let cluster = create_html(&document, "div")?;
        cluster.set_class_name(&controls_class(self.engine.config().controls_position));

        let supported = fullscreen::is_supported();
        if !supported {
            log::debug!("Fullscreen unavailable, omitting its control");
        }

        let mut listeners = Vec::new();
        for action in ControlAction::cluster(supported) {
            let (button, listener) = self.button(&document, action)?;
            cluster
                .append_child(&button)
                .map_err(|e| FeatureError::Element(format!("{:?}", e)))?;
            listeners.push(listener);
        }

        self.container
            .append_child(&cluster)
            .map_err(|e| FeatureError::Element(format!("{:?}", e)))?;
        self.cluster = Some(cluster);
        self.listeners = listeners;
        Ok(())
    }

    fn destroy(&mut self) {
        self.listeners.clear();
        if let Some(cluster) = self.cluster.take() {
            cluster.remove();
        }
    }
}
