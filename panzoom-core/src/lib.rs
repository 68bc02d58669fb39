//! Pan/zoom viewport engine for an embedded vector graphic.
//!
//! The engine owns one `{scale, translateX, translateY}` state per viewport,
//! keeps it within zoom and pan limits, writes it onto a [`Surface`] and
//! announces changes on an [`EventBus`]. Input features share the engine and
//! mutate it through its public operations.

pub mod bounds;
pub mod bus;
pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod indicator;
pub mod input;
pub mod state;
pub mod surface;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transforms;
pub mod viewer;

pub use bounds::{
    parse_length, parse_view_box, resolve_content_bounds, BoundsOrigin, BoundsSource,
    ContentBounds,
};
pub use bus::{EventBus, Listener, ListenerId, ViewEvent};
pub use config::{ControlsPosition, PanZoomConfig};
pub use controls::{controls_class, ControlAction};
pub use engine::{Lifecycle, ViewportEngine};
pub use error::{BoundsError, ConfigError, EventNameError, FeatureError, ListenerError};
pub use feature::{Feature, FeatureKind, FeatureRegistry};
pub use geometry::{Point, Size};
pub use indicator::{format_zoom_level, BadgeView, ZoomIndicator};
pub use state::ViewState;
pub use surface::{PendingTask, Scheduler, Surface};
pub use transforms::{constrain_translation, pan_limit, zoom_about};
pub use viewer::Viewer;
