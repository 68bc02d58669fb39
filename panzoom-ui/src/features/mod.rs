//! DOM bindings for each input feature.

mod context_menu;
mod controls;
mod double_click;
mod drag;
pub mod fullscreen;
mod keyboard;
mod touch;
mod wheel;
mod zoom_indicator;

pub use context_menu::ContextMenuFeature;
pub use controls::ControlsFeature;
pub use double_click::DoubleClickFeature;
pub use drag::DragFeature;
pub use keyboard::KeyboardFeature;
pub use touch::TouchFeature;
pub use wheel::WheelFeature;
pub use zoom_indicator::{ZoomIndicatorFeature, BADGE_CLASS};

use panzoom_core::{Feature, FeatureKind, ViewportEngine};

use crate::dom::DomSurface;

/// Build the DOM binding for `kind` on the given surface.
pub fn build_feature(
    kind: FeatureKind,
    engine: &ViewportEngine,
    surface: &DomSurface,
) -> Option<Box<dyn Feature>> {
    let engine = engine.clone();
    let container = surface.container().clone();
    let graphic = surface.graphic().clone();
    let feature: Box<dyn Feature> = match kind {
        FeatureKind::ContextMenu => Box::new(ContextMenuFeature::new(container)),
        FeatureKind::Wheel => Box::new(WheelFeature::new(engine, container)),
        FeatureKind::Drag => Box::new(DragFeature::new(engine, container, graphic)),
        FeatureKind::Touch => Box::new(TouchFeature::new(engine, container, graphic)),
        FeatureKind::Keyboard => Box::new(KeyboardFeature::new(engine, container)),
        FeatureKind::DoubleClick => Box::new(DoubleClickFeature::new(engine, graphic.into())),
        FeatureKind::ZoomIndicator => Box::new(ZoomIndicatorFeature::new(engine, container)),
        FeatureKind::Controls => Box::new(ControlsFeature::new(engine, container)),
    };
    Some(feature)
}
