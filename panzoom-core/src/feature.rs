//! Feature lifecycle and registry.
//!
//! A feature binds one input modality (or one piece of on-screen UI) to the
//! engine. Features are created by the composition root according to the
//! configuration; a feature turned off by configuration is recorded as an
//! empty slot rather than left out, so callers can always ask about it.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::PanZoomConfig;
use crate::error::FeatureError;

/// Every feature the composition root knows about, in initialization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKind {
    ContextMenu,
    Wheel,
    Drag,
    Touch,
    Keyboard,
    DoubleClick,
    ZoomIndicator,
    Controls,
}

impl FeatureKind {
    pub const ORDER: [FeatureKind; 8] = [
        FeatureKind::ContextMenu,
        FeatureKind::Wheel,
        FeatureKind::Drag,
        FeatureKind::Touch,
        FeatureKind::Keyboard,
        FeatureKind::DoubleClick,
        FeatureKind::ZoomIndicator,
        FeatureKind::Controls,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::ContextMenu => "contextMenu",
            FeatureKind::Wheel => "wheel",
            FeatureKind::Drag => "drag",
            FeatureKind::Touch => "touch",
            FeatureKind::Keyboard => "keyboard",
            FeatureKind::DoubleClick => "doubleClick",
            FeatureKind::ZoomIndicator => "zoomIndicator",
            FeatureKind::Controls => "controls",
        }
    }

    /// Whether `config` asks for this feature.
    pub fn enabled_by(self, config: &PanZoomConfig) -> bool {
        match self {
            FeatureKind::Touch => config.enable_touch,
            FeatureKind::Keyboard => config.enable_keyboard,
            FeatureKind::ZoomIndicator => config.show_zoom_level_indicator,
            FeatureKind::Controls => config.show_controls,
            FeatureKind::ContextMenu
            | FeatureKind::Wheel
            | FeatureKind::Drag
            | FeatureKind::DoubleClick => true,
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common lifecycle of every feature.
pub trait Feature {
    fn kind(&self) -> FeatureKind;

    /// Attach listeners and create any on-screen elements.
    fn initialize(&mut self) -> Result<(), FeatureError>;

    /// Detach listeners and remove created elements. Must be idempotent.
    fn destroy(&mut self) {}
}

/// Mapping from feature kind to a present feature or an empty slot.
#[derive(Default)]
pub struct FeatureRegistry {
    slots: BTreeMap<FeatureKind, Option<Box<dyn Feature>>>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: FeatureKind, feature: Option<Box<dyn Feature>>) {
        self.slots.insert(kind, feature);
    }

    /// `Some(true)` present, `Some(false)` disabled, `None` never registered.
    pub fn slot(&self, kind: FeatureKind) -> Option<bool> {
        self.slots.get(&kind).map(Option::is_some)
    }

    pub fn is_present(&self, kind: FeatureKind) -> bool {
        self.slot(kind) == Some(true)
    }

    pub fn get(&self, kind: FeatureKind) -> Option<&dyn Feature> {
        self.slots.get(&kind)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Initialize every present feature in order. Failures are logged and do
    /// not stop the remaining features. Returns the kinds that failed.
    pub fn initialize_all(&mut self) -> Vec<FeatureKind> {
        let mut failed = Vec::new();
        for (kind, feature) in self.slots.iter_mut() {
            let Some(feature) = feature else {
                continue;
            };
            match feature.initialize() {
                Ok(()) => log::debug!("Feature '{}' initialized", kind),
                Err(e) => {
                    log::warn!("Feature '{}' failed to initialize: {}", kind, e);
                    failed.push(*kind);
                }
            }
        }
        failed
    }

    /// Destroy every present feature in reverse order and empty the registry.
    pub fn destroy_all(&mut self) {
        for (kind, feature) in self.slots.iter_mut().rev() {
            if let Some(feature) = feature {
                feature.destroy();
                log::debug!("Feature '{}' destroyed", kind);
            }
        }
        self.slots.clear();
    }
}

impl fmt::Debug for FeatureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|(kind, slot)| (kind, slot.is_some())))
            .finish()
    }
}
