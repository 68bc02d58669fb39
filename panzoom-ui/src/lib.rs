//! Browser bindings for the pan/zoom viewport engine.
//!
//! Exposes the `PanZoom` class, the `initPanZoom` page bootstrap and
//! `getInstance` to JavaScript. All interpretation of input lives in
//! `panzoom-core`; this crate only wires DOM events and elements to it.

pub mod api;
pub mod bootstrap;
pub mod dom;
pub mod features;
pub mod legacy;

pub use api::PanZoom;
pub use bootstrap::{get_instance, init_pan_zoom};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}
