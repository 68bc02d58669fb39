//! Browser-side collaborators: rendering surface, timers and listeners.

mod listener;
mod scheduler;
mod surface;

pub use listener::EventListener;
pub use scheduler::TimeoutScheduler;
pub use surface::DomSurface;

use panzoom_core::Point;
use web_sys::{Document, Element};

/// Convert client coordinates to a point relative to `element`'s top-left corner.
pub fn local_point(element: &Element, client_x: i32, client_y: i32) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}
