// panzoom-ui/src/dom/surface.rs
use panzoom_core::{
    resolve_content_bounds, BoundsError, BoundsSource, ContentBounds, Size, Surface, ViewState,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, SvgElement, SvgGraphicsElement};

/// Renders the view state as a CSS transform on the graphic element.
///
/// The container supplies the viewport size; the graphic supplies the
/// content bounds and receives the transform.
#[derive(Clone, Debug)]
pub struct DomSurface {
    container: HtmlElement,
    graphic: SvgElement,
}

impl DomSurface {
    /// Locate the graphic inside `container`. Returns `None` when the
    /// container holds no `svg` element.
    pub fn locate(container: &HtmlElement) -> Option<Self> {
        let graphic = container
            .query_selector("svg")
            .ok()
            .flatten()?
            .dyn_into::<SvgElement>()
            .ok()?;

        let style = graphic.style();
        let _ = style.set_property("transform-origin", "0 0");

        Some(Self {
            container: container.clone(),
            graphic,
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn graphic(&self) -> &SvgElement {
        &self.graphic
    }
}

impl Surface for DomSurface {
    fn viewport_size(&self) -> Size {
        Size::new(
            self.container.client_width() as f64,
            self.container.client_height() as f64,
        )
    }

    fn content_bounds(&self) -> ContentBounds {
        resolve_content_bounds(self)
    }

    fn set_transition(&self, duration_ms: Option<u32>) {
        let value = match duration_ms {
            Some(ms) => format!("transform {}ms ease-out", ms),
            None => "none".to_string(),
        };
        if let Err(e) = self.graphic.style().set_property("transition", &value) {
            log::warn!("Failed to set transition: {:?}", e);
        }
    }

    fn set_transform(&self, state: &ViewState) {
        if let Err(e) = self
            .graphic
            .style()
            .set_property("transform", &state.css_transform())
        {
            log::warn!("Failed to set transform: {:?}", e);
        }
    }
}

impl BoundsSource for DomSurface {
    fn bounding_box(&self) -> Result<Size, BoundsError> {
        let element = self
            .graphic
            .dyn_ref::<SvgGraphicsElement>()
            .ok_or_else(|| BoundsError::Unavailable("not a graphics element".to_string()))?;
        let rect = element
            .get_b_box()
            .map_err(|e| BoundsError::Unavailable(format!("{:?}", e)))?;
        let size = Size::new(rect.width() as f64, rect.height() as f64);
        if size.is_valid() {
            Ok(size)
        } else {
            Err(BoundsError::Degenerate {
                width: size.width,
                height: size.height,
            })
        }
    }

    fn view_box(&self) -> Option<String> {
        self.graphic.get_attribute("viewBox")
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.graphic.get_attribute(name)
    }
}
