// panzoom-ui/src/api.rs
//! The JavaScript-facing viewer handle.
//!
//! Every method is safe to call in any lifecycle state. Failures are logged
//! and never thrown into the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::str::FromStr;

use gloo_utils::format::JsValueSerdeExt;
use panzoom_core::{
    ConfigError, Lifecycle, ListenerError, ListenerId, PanZoomConfig, Surface, ViewEvent,
    Viewer, ViewportEngine,
};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::bootstrap;
use crate::dom::{DomSurface, TimeoutScheduler};
use crate::features::build_feature;

/// Read the host's options object. `undefined`/`null` means all defaults.
/// Normalization happens when the engine is built.
pub fn read_config(options: &JsValue) -> Result<PanZoomConfig, ConfigError> {
    if options.is_undefined() || options.is_null() {
        return Ok(PanZoomConfig::default());
    }
    if !options.is_object() {
        return Err(ConfigError::Unreadable(format!("{:?}", options)));
    }
    Ok(options.into_serde()?)
}

struct Instance {
    engine: ViewportEngine,
    viewer: RefCell<Viewer>,
    container: HtmlElement,
    registry_id: Cell<Option<u32>>,
}

/// Pan/zoom viewer bound to one container element.
#[wasm_bindgen(js_name = PanZoom)]
#[derive(Clone)]
pub struct PanZoom {
    inner: Rc<Instance>,
}

impl PanZoom {
    /// Build a viewer for `container` from an already-parsed configuration.
    pub fn with_config(container: HtmlElement, config: PanZoomConfig) -> Self {
        let surface = DomSurface::locate(&container);
        let engine = ViewportEngine::new(
            config,
            surface.clone().map(|s| Rc::new(s) as Rc<dyn Surface>),
            Rc::new(TimeoutScheduler),
        );
        let viewer = Viewer::assemble(engine.clone(), |kind, engine| {
            surface
                .as_ref()
                .and_then(|surface| build_feature(kind, engine, surface))
        });

        Self {
            inner: Rc::new(Instance {
                engine,
                viewer: RefCell::new(viewer),
                container,
                registry_id: Cell::new(None),
            }),
        }
    }

    pub fn engine(&self) -> &ViewportEngine {
        &self.inner.engine
    }

    pub(crate) fn set_registry_id(&self, id: u32) {
        self.inner.registry_id.set(Some(id));
    }
}

#[wasm_bindgen(js_class = PanZoom)]
impl PanZoom {
    /// Create a viewer for the graphic inside `container`. A container with
    /// no graphic yields an inert viewer.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: JsValue) -> PanZoom {
        let config = read_config(&options).unwrap_or_else(|e| {
            log::warn!("Using default options: {}", e);
            PanZoomConfig::default()
        });
        Self::with_config(container, config)
    }

    /// Write the initial transform and attach every input feature.
    pub fn initialize(&self) {
        match self.inner.viewer.try_borrow_mut() {
            Ok(mut viewer) => viewer.initialize(),
            Err(_) => log::warn!("initialize() called re-entrantly, ignoring"),
        }
    }

    /// Detach every feature and make all further calls no-ops.
    pub fn destroy(&self) {
        if let Some(id) = self.inner.registry_id.take() {
            bootstrap::forget(id);
            if let Err(e) = self.inner.container.remove_attribute(bootstrap::ID_ATTRIBUTE) {
                log::warn!("Failed to unmark container: {:?}", e);
            }
        }
        match self.inner.viewer.try_borrow_mut() {
            Ok(mut viewer) => viewer.destroy(),
            // Still silence the engine; features go when the viewer is dropped.
            Err(_) => self.inner.engine.destroy(),
        }
    }

    pub fn reset(&self) {
        self.inner.engine.reset();
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) {
        self.inner.engine.zoom_in();
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        self.inner.engine.zoom_out();
    }

    /// Zoom by `delta` keeping viewport point `(x, y)` fixed.
    #[wasm_bindgen(js_name = zoomAt)]
    pub fn zoom_at(&self, x: f64, y: f64, delta: f64) {
        self.inner.engine.zoom_at(x, y, delta);
    }

    #[wasm_bindgen(js_name = panBy)]
    pub fn pan_by(&self, dx: f64, dy: f64) {
        self.inner.engine.pan_by(dx, dy);
    }

    /// Current `{ translateX, translateY, scale }`.
    pub fn state(&self) -> JsValue {
        JsValue::from_serde(&self.inner.engine.state()).unwrap_or(JsValue::UNDEFINED)
    }

    /// Subscribe `callback` to `reset`, `zoom`, `pan` or `arrow`. Returns a
    /// subscription id, or `undefined` for an unknown name or a dead viewer.
    pub fn on(&self, event: &str, callback: js_sys::Function) -> Option<f64> {
        let event = match ViewEvent::from_str(event) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("{}", e);
                return None;
            }
        };

        let id = self.inner.engine.on(event, move |state| {
            let payload =
                JsValue::from_serde(state).map_err(|e| ListenerError(e.to_string()))?;
            callback
                .call1(&JsValue::NULL, &payload)
                .map(|_| ())
                .map_err(|e| ListenerError(format!("{:?}", e)))
        })?;
        Some(id.as_u64() as f64)
    }

    /// Remove a subscription made with `on`. Returns whether it existed.
    pub fn off(&self, event: &str, id: f64) -> bool {
        match ViewEvent::from_str(event) {
            Ok(event) if id.is_finite() && id >= 0.0 => {
                self.inner.engine.off(event, ListenerId::from_u64(id as u64))
            }
            Ok(_) => false,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.engine.lifecycle() == Lifecycle::Active
    }

    #[wasm_bindgen(js_name = isDestroyed)]
    pub fn is_destroyed(&self) -> bool {
        self.inner.engine.lifecycle() == Lifecycle::Destroyed
    }

    /// The element this viewer manages.
    #[wasm_bindgen(getter)]
    pub fn container(&self) -> HtmlElement {
        self.inner.container.clone()
    }
}
