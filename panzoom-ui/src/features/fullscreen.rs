// panzoom-ui/src/features/fullscreen.rs
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

use crate::dom::document;

/// Whether the page may enter fullscreen at all.
pub fn is_supported() -> bool {
    document().map(|d| d.fullscreen_enabled()).unwrap_or(false)
}

/// Check if currently in fullscreen mode
fn is_fullscreen(document: &Document) -> bool {
    document.fullscreen_element().is_some()
}

/// Toggle fullscreen for `element`: exit if anything is fullscreen, else enter.
pub fn toggle_fullscreen(element: &Element) {
    let Some(document) = document() else {
        return;
    };
    if !document.fullscreen_enabled() {
        log::warn!("Fullscreen is not supported on this page");
        return;
    }

    let (target, method): (JsValue, &'static str) = if is_fullscreen(&document) {
        (JsValue::from(document), "exitFullscreen")
    } else {
        (JsValue::from(element.clone()), "requestFullscreen")
    };

    match call_for_promise(&target, method) {
        // Rejections may arrive after teardown; they only get logged.
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("{} was refused: {:?}", method, e);
            }
        }),
        Err(e) => log::warn!("{} failed: {:?}", method, e),
    }
}

fn call_for_promise(target: &JsValue, method: &str) -> Result<Promise, JsValue> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    let result = function.call0(target)?;
    // Older engines return undefined instead of a promise.
    Ok(result
        .dyn_into::<Promise>()
        .unwrap_or_else(|_| Promise::resolve(&JsValue::UNDEFINED)))
}
