//! Composition root: one engine plus its configured features.

use crate::engine::{Lifecycle, ViewportEngine};
use crate::feature::{Feature, FeatureKind, FeatureRegistry};

/// A viewport engine assembled with its input features.
///
/// Initialization runs engine first, then features in [`FeatureKind::ORDER`].
/// Teardown runs features in reverse, then the engine.
#[derive(Debug)]
pub struct Viewer {
    engine: ViewportEngine,
    features: FeatureRegistry,
}

impl Viewer {
    /// Build the feature set. `make` is asked for each kind the configuration
    /// enables; disabled kinds get an empty slot. An inert engine gets no
    /// features at all.
    pub fn assemble<F>(engine: ViewportEngine, mut make: F) -> Self
    where
        F: FnMut(FeatureKind, &ViewportEngine) -> Option<Box<dyn Feature>>,
    {
        let mut features = FeatureRegistry::new();
        if engine.is_live() {
            for kind in FeatureKind::ORDER {
                let slot = if kind.enabled_by(engine.config()) {
                    make(kind, &engine)
                } else {
                    None
                };
                features.insert(kind, slot);
            }
        }
        Self { engine, features }
    }

    pub fn engine(&self) -> &ViewportEngine {
        &self.engine
    }

    pub fn features(&self) -> &FeatureRegistry {
        &self.features
    }

    pub fn initialize(&mut self) {
        if self.engine.lifecycle() != Lifecycle::Created {
            return;
        }
        self.engine.initialize();
        self.features.initialize_all();
    }

    pub fn reset(&self) {
        self.engine.reset();
    }

    pub fn zoom_in(&self) {
        self.engine.zoom_in();
    }

    pub fn zoom_out(&self) {
        self.engine.zoom_out();
    }

    /// Tear down features and engine. Safe to call any number of times.
    pub fn destroy(&mut self) {
        self.features.destroy_all();
        self.engine.destroy();
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        self.destroy();
    }
}
