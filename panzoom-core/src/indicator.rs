//! Zoom level badge timing.
//!
//! The badge shows on every `zoom` event and hides after
//! [`HIDE_DELAY_MS`] without another one. Each event re-arms the hide timer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::{ListenerId, ViewEvent};
use crate::engine::ViewportEngine;
use crate::surface::PendingTask;

pub const HIDE_DELAY_MS: u32 = 1500;

/// Where the badge text goes.
pub trait BadgeView {
    fn show(&self, text: &str);
    fn hide(&self);
}

/// Badge label for a scale, e.g. `1.3 -> "130%"`.
pub fn format_zoom_level(scale: f64) -> String {
    format!("{}%", (scale * 100.0).round())
}

pub struct ZoomIndicator {
    engine: ViewportEngine,
    view: Rc<dyn BadgeView>,
    hide_task: Rc<RefCell<Option<PendingTask>>>,
    subscription: Option<ListenerId>,
}

impl ZoomIndicator {
    pub fn new(engine: ViewportEngine, view: Rc<dyn BadgeView>) -> Self {
        Self {
            engine,
            view,
            hide_task: Rc::new(RefCell::new(None)),
            subscription: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribe to `zoom` events. No-op if already attached or the engine is inert.
    pub fn attach(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let view = Rc::clone(&self.view);
        let hide_task = Rc::clone(&self.hide_task);
        let scheduler = self.engine.scheduler();

        self.subscription = self.engine.on(ViewEvent::Zoom, move |state| {
            view.show(&format_zoom_level(state.scale));

            let view_for_hide = Rc::clone(&view);
            let task = scheduler.schedule(HIDE_DELAY_MS, Box::new(move || view_for_hide.hide()));
            // Replacing the previous task cancels it
            *hide_task.borrow_mut() = Some(task);
            Ok(())
        });
    }

    /// Unsubscribe and cancel any pending hide.
    pub fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.engine.off(ViewEvent::Zoom, id);
        }
        self.hide_task.borrow_mut().take();
    }
}

impl Drop for ZoomIndicator {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for ZoomIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomIndicator")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanZoomConfig;
    use crate::geometry::Size;
    use crate::testing::{ManualScheduler, RecordingSurface};
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeBadge {
        text: RefCell<String>,
        visible: Cell<bool>,
    }

    impl BadgeView for FakeBadge {
        fn show(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
            self.visible.set(true);
        }

        fn hide(&self) {
            self.visible.set(false);
        }
    }

    fn setup() -> (ViewportEngine, Rc<ManualScheduler>, Rc<FakeBadge>, ZoomIndicator) {
        let surface = Rc::new(RecordingSurface::new(
            Size::new(400.0, 300.0),
            Size::new(800.0, 600.0),
        ));
        let scheduler = Rc::new(ManualScheduler::new());
        let engine = ViewportEngine::new(
            PanZoomConfig {
                zoom_step: 0.3,
                ..Default::default()
            },
            Some(surface),
            scheduler.clone(),
        );
        engine.initialize();
        let badge = Rc::new(FakeBadge::default());
        let mut indicator = ZoomIndicator::new(engine.clone(), badge.clone());
        indicator.attach();
        (engine, scheduler, badge, indicator)
    }

    #[test]
    fn label_is_rounded_percent() {
        assert_eq!(format_zoom_level(1.0), "100%");
        assert_eq!(format_zoom_level(1.3), "130%");
        assert_eq!(format_zoom_level(0.456), "46%");
        assert_eq!(format_zoom_level(2.0049), "200%");
    }

    #[test]
    fn shows_on_zoom_and_hides_after_silence() {
        let (engine, scheduler, badge, _indicator) = setup();
        assert!(!badge.visible.get());

        engine.zoom_in();
        assert!(badge.visible.get());
        assert_eq!(*badge.text.borrow(), "130%");

        scheduler.advance(1499);
        assert!(badge.visible.get());
        scheduler.advance(1);
        assert!(!badge.visible.get());
    }

    #[test]
    fn second_zoom_restarts_hide_timer() {
        let (engine, scheduler, badge, _indicator) = setup();
        engine.zoom_in();
        scheduler.advance(1000);
        engine.zoom_in();
        assert_eq!(*badge.text.borrow(), "160%");

        // Original deadline at 1500 passes without hiding
        scheduler.advance(500);
        assert!(badge.visible.get());
        // New deadline is 1000 + 1500
        scheduler.advance(999);
        assert!(badge.visible.get());
        scheduler.advance(1);
        assert!(!badge.visible.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn ignores_non_zoom_events() {
        let (engine, _, badge, _indicator) = setup();
        engine.pan_by(10.0, 0.0);
        engine.reset();
        assert!(!badge.visible.get());
    }

    #[test]
    fn detach_stops_updates_and_cancels_hide() {
        let (engine, scheduler, badge, mut indicator) = setup();
        engine.zoom_in();
        indicator.detach();
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(engine.listener_count(ViewEvent::Zoom), 0);

        badge.visible.set(false);
        engine.zoom_in();
        assert!(!badge.visible.get());
    }
}
