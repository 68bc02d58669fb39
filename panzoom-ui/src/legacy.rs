// panzoom-ui/src/legacy.rs
//! Deprecated entry points kept for pages written against the old names.

use std::cell::Cell;
use std::thread::LocalKey;

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::api::PanZoom;
use crate::bootstrap::init_pan_zoom;

thread_local! {
    static CLASS_WARNED: Cell<bool> = const { Cell::new(false) };
    static INIT_WARNED: Cell<bool> = const { Cell::new(false) };
}

/// Log `message` the first time `flag` is seen. Returns whether it logged.
fn warn_once(flag: &'static LocalKey<Cell<bool>>, message: &str) -> bool {
    flag.with(|warned| {
        let first = !warned.replace(true);
        if first {
            log::warn!("{}", message);
        }
        first
    })
}

/// Deprecated alias of `PanZoom`. Every method forwards unchanged.
#[wasm_bindgen]
pub struct SvgPanZoom {
    inner: PanZoom,
}

impl SvgPanZoom {
    /// The viewer behind the alias.
    pub fn viewer(&self) -> &PanZoom {
        &self.inner
    }
}

#[wasm_bindgen]
impl SvgPanZoom {
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: JsValue) -> SvgPanZoom {
        warn_once(&CLASS_WARNED, "SvgPanZoom is deprecated, use PanZoom instead");
        SvgPanZoom {
            inner: PanZoom::new(container, options),
        }
    }

    pub fn initialize(&self) {
        self.inner.initialize();
    }

    pub fn destroy(&self) {
        self.inner.destroy();
    }

    pub fn reset(&self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) {
        self.inner.zoom_in();
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        self.inner.zoom_out();
    }

    #[wasm_bindgen(js_name = zoomAt)]
    pub fn zoom_at(&self, x: f64, y: f64, delta: f64) {
        self.inner.zoom_at(x, y, delta);
    }

    #[wasm_bindgen(js_name = panBy)]
    pub fn pan_by(&self, dx: f64, dy: f64) {
        self.inner.pan_by(dx, dy);
    }

    pub fn state(&self) -> JsValue {
        self.inner.state()
    }

    pub fn on(&self, event: &str, callback: Function) -> Option<f64> {
        self.inner.on(event, callback)
    }

    pub fn off(&self, event: &str, id: f64) -> bool {
        self.inner.off(event, id)
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    #[wasm_bindgen(js_name = isDestroyed)]
    pub fn is_destroyed(&self) -> bool {
        self.inner.is_destroyed()
    }

    #[wasm_bindgen(getter)]
    pub fn container(&self) -> HtmlElement {
        self.inner.container()
    }
}

/// Deprecated alias of `initPanZoom`.
#[wasm_bindgen(js_name = initSvgPanZoom)]
pub fn init_svg_pan_zoom(target: JsValue, options: JsValue) -> Array {
    warn_once(&INIT_WARNED, "initSvgPanZoom is deprecated, use initPanZoom instead");
    init_pan_zoom(target, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    thread_local! {
        static WARNED: Cell<bool> = const { Cell::new(false) };
    }

    #[test]
    fn warning_is_logged_once_per_flag() {
        assert!(warn_once(&WARNED, "first"));
        assert!(!warn_once(&WARNED, "second"));
        assert!(!warn_once(&WARNED, "third"));
        assert!(WARNED.with(Cell::get));
    }
}
