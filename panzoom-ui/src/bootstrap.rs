// panzoom-ui/src/bootstrap.rs
//! Page-level discovery: wrap each target graphic in a container and attach a viewer.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use js_sys::Array;
use panzoom_core::PanZoomConfig;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use crate::api::{read_config, PanZoom};
use crate::dom::document;

pub const DEFAULT_SELECTOR: &str = "svg[data-panzoom]";
pub const CONTAINER_CLASS: &str = "panzoom-container";
pub const ID_ATTRIBUTE: &str = "data-panzoom-id";

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("no document available")]
    NoDocument,

    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    #[error("target must be a selector, an element or an array of elements")]
    Target,

    #[error("target element has no parent to wrap it in")]
    Detached,

    #[error("no <svg> found in target")]
    NoGraphic,

    #[error("failed to build container: {0}")]
    Dom(String),
}

impl BootstrapError {
    fn dom(e: JsValue) -> Self {
        BootstrapError::Dom(format!("{:?}", e))
    }
}

thread_local! {
    static REGISTRY: RefCell<HashMap<u32, PanZoom>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

fn register(instance: &PanZoom) -> u32 {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });
    REGISTRY.with(|registry| registry.borrow_mut().insert(id, instance.clone()));
    instance.set_registry_id(id);
    id
}

/// Drop the registry entry for `id`. Called when an instance is destroyed.
pub(crate) fn forget(id: u32) {
    let removed = REGISTRY.with(|registry| registry.borrow_mut().remove(&id));
    drop(removed);
}

fn registry_id(element: &Element) -> Option<u32> {
    element.get_attribute(ID_ATTRIBUTE)?.parse().ok()
}

/// Resolve `target` into the list of elements to manage.
fn resolve_targets(target: &JsValue) -> Result<Vec<Element>, BootstrapError> {
    if let Some(element) = target.dyn_ref::<Element>() {
        return Ok(vec![element.clone()]);
    }
    if Array::is_array(target) {
        let array: &Array = target.unchecked_ref();
        return Ok(array
            .iter()
            .filter_map(|item| item.dyn_into::<Element>().ok())
            .collect());
    }

    let selector = if target.is_undefined() || target.is_null() {
        DEFAULT_SELECTOR.to_string()
    } else {
        target.as_string().ok_or(BootstrapError::Target)?
    };

    let document = document().ok_or(BootstrapError::NoDocument)?;
    let nodes = document
        .query_selector_all(&selector)
        .map_err(|e| BootstrapError::Selector {
            selector: selector.clone(),
            reason: format!("{:?}", e),
        })?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Whether `element` already sits inside a container with a registered viewer.
fn is_managed(element: &Element) -> bool {
    element
        .parent_element()
        .as_ref()
        .and_then(registry_id)
        .map(|id| REGISTRY.with(|registry| registry.borrow().contains_key(&id)))
        .unwrap_or(false)
}

/// Whether `element` is a graphic or holds one.
fn has_graphic(element: &Element) -> bool {
    element.tag_name().eq_ignore_ascii_case("svg")
        || matches!(element.query_selector("svg"), Ok(Some(_)))
}

/// Move `element` into a container placed where it used to be. A container
/// left behind by a destroyed viewer is reused.
fn wrap(element: &Element) -> Result<HtmlElement, BootstrapError> {
    if let Some(parent) = element.parent_element() {
        if parent.class_list().contains(CONTAINER_CLASS) {
            if let Ok(existing) = parent.dyn_into::<HtmlElement>() {
                return Ok(existing);
            }
        }
    }

    let document = document().ok_or(BootstrapError::NoDocument)?;
    let parent = element.parent_node().ok_or(BootstrapError::Detached)?;

    let wrapper = document
        .create_element("div")
        .map_err(BootstrapError::dom)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootstrapError::Dom("container is not an HtmlElement".to_string()))?;
    wrapper.set_class_name(CONTAINER_CLASS);

    let anchor: &Node = element;
    parent
        .insert_before(&wrapper, Some(anchor))
        .map_err(BootstrapError::dom)?;
    wrapper.append_child(element).map_err(BootstrapError::dom)?;
    Ok(wrapper)
}

fn attach(element: &Element, config: &PanZoomConfig) -> Result<PanZoom, BootstrapError> {
    if !has_graphic(element) {
        return Err(BootstrapError::NoGraphic);
    }
    let wrapper = wrap(element)?;
    let instance = PanZoom::with_config(wrapper.clone(), config.clone());
    instance.initialize();
    let id = register(&instance);
    wrapper
        .set_attribute(ID_ATTRIBUTE, &id.to_string())
        .map_err(BootstrapError::dom)?;
    log::debug!("Pan/zoom instance {} attached", id);
    Ok(instance)
}

/// Attach viewers to every target not already managed and return them.
pub fn init_all(target: &JsValue, config: &PanZoomConfig) -> Result<Vec<PanZoom>, BootstrapError> {
    let targets = resolve_targets(target)?;
    let mut created = Vec::new();
    let mut skipped = 0;

    for element in &targets {
        if is_managed(element) {
            skipped += 1;
            continue;
        }
        match attach(element, config) {
            Ok(instance) => created.push(instance),
            Err(e) => log::warn!("Skipping pan/zoom target: {}", e),
        }
    }

    log::info!(
        "Pan/zoom attached to {} of {} targets ({} already managed)",
        created.len(),
        targets.len(),
        skipped
    );
    Ok(created)
}

/// Attach viewers to `target` (selector, element or array; defaults to
/// `svg[data-panzoom]`). Returns the viewers created.
#[wasm_bindgen(js_name = initPanZoom)]
pub fn init_pan_zoom(target: JsValue, options: JsValue) -> Array {
    let config = read_config(&options).unwrap_or_else(|e| {
        log::warn!("Using default options: {}", e);
        PanZoomConfig::default()
    });

    let instances = init_all(&target, &config).unwrap_or_else(|e| {
        log::warn!("initPanZoom: {}", e);
        Vec::new()
    });
    instances.into_iter().map(JsValue::from).collect()
}

/// The viewer managing `element`, which may be the container or the graphic itself.
#[wasm_bindgen(js_name = getInstance)]
pub fn get_instance(element: &Element) -> Option<PanZoom> {
    let id = registry_id(element).or_else(|| element.parent_element().as_ref().and_then(registry_id))?;
    REGISTRY.with(|registry| registry.borrow().get(&id).cloned())
}
