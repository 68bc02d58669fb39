// panzoom-ui/src/features/zoom_indicator.rs
use std::rc::Rc;

use panzoom_core::{BadgeView, Feature, FeatureError, FeatureKind, ViewportEngine, ZoomIndicator};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::document;

pub const BADGE_CLASS: &str = "panzoom-zoom-level";

/// The badge element. Hidden by opacity so it can fade via stylesheet.
struct DomBadge {
    element: HtmlElement,
}

impl DomBadge {
    fn set_opacity(&self, value: &str) {
        let _ = self.element.style().set_property("opacity", value);
    }
}

impl BadgeView for DomBadge {
    fn show(&self, text: &str) {
        self.element.set_text_content(Some(text));
        self.set_opacity("1");
    }

    fn hide(&self) {
        self.set_opacity("0");
    }
}

/// Transient zoom percentage badge in the viewport corner.
pub struct ZoomIndicatorFeature {
    engine: ViewportEngine,
    container: HtmlElement,
    badge: Option<HtmlElement>,
    indicator: Option<ZoomIndicator>,
}

impl ZoomIndicatorFeature {
    pub fn new(engine: ViewportEngine, container: HtmlElement) -> Self {
        Self {
            engine,
            container,
            badge: None,
            indicator: None,
        }
    }
}

impl Feature for ZoomIndicatorFeature {
    fn kind(&self) -> FeatureKind {
        FeatureKind::ZoomIndicator
    }

    fn initialize(&mut self) -> Result<(), FeatureError> {
        let document = document().ok_or(FeatureError::Unsupported("document"))?;
        let element = document
            .create_element("div")
            .map_err(|e| FeatureError::Element(format!("{:?}", e)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| FeatureError::Element("badge is not an HtmlElement".to_string()))?;
        element.set_class_name(BADGE_CLASS);
        // Screen readers announce each new zoom level.
        for (name, value) in [("aria-live", "polite"), ("aria-label", "Current zoom level")] {
            element
                .set_attribute(name, value)
                .map_err(|e| FeatureError::Element(format!("{:?}", e)))?;
        }
        self.container
            .append_child(&element)
            .map_err(|e| FeatureError::Element(format!("{:?}", e)))?;

        let view = DomBadge {
            element: element.clone(),
        };
        view.hide();

        let mut indicator = ZoomIndicator::new(self.engine.clone(), Rc::new(view));
        indicator.attach();

        self.badge = Some(element);
        self.indicator = Some(indicator);
        Ok(())
    }

    fn destroy(&mut self) {
        if let Some(mut indicator) = self.indicator.take() {
            indicator.detach();
        }
        if let Some(badge) = self.badge.take() {
            badge.remove();
        }
    }
}
