//! Viewport engine: the single owner of the transform state.
//!
//! Every input feature holds a cloned [`ViewportEngine`] handle and mutates the
//! same state through it. All mutation is synchronous and single-threaded, so
//! the state lives in a `Cell` and each operation reads it fresh.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::bus::{EventBus, ListenerId, ViewEvent};
use crate::config::PanZoomConfig;
use crate::error::ListenerError;
use crate::geometry::{Point, Size};
use crate::state::ViewState;
use crate::surface::{PendingTask, Scheduler, Surface};
use crate::transforms::{constrain_translation, zoom_about};

/// Engine lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed with a graphic, not yet initialized
    Created,
    /// Initialized and accepting input
    Active,
    /// No graphic was found at construction; permanently inert
    Inert,
    /// Torn down; permanently inert
    Destroyed,
}

impl Lifecycle {
    /// Operations have an effect only in these states.
    pub fn is_live(self) -> bool {
        matches!(self, Lifecycle::Created | Lifecycle::Active)
    }
}

struct EngineInner {
    config: PanZoomConfig,
    surface: Option<Rc<dyn Surface>>,
    scheduler: Rc<dyn Scheduler>,
    state: Cell<ViewState>,
    lifecycle: Cell<Lifecycle>,
    bus: EventBus,
    transition: RefCell<Option<PendingTask>>,
}

/// Shared handle to one viewport's engine. Cloning shares the same state.
#[derive(Clone)]
pub struct ViewportEngine {
    inner: Rc<EngineInner>,
}

impl ViewportEngine {
    /// Build an engine over `surface`. A missing surface yields a permanently
    /// inert engine instead of an error.
    pub fn new(
        config: PanZoomConfig,
        surface: Option<Rc<dyn Surface>>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let lifecycle = if surface.is_some() {
            Lifecycle::Created
        } else {
            log::warn!("No graphic element found in container; pan/zoom disabled");
            Lifecycle::Inert
        };

        Self {
            inner: Rc::new(EngineInner {
                config: config.normalized(),
                surface,
                scheduler,
                state: Cell::new(ViewState::IDENTITY),
                lifecycle: Cell::new(lifecycle),
                bus: EventBus::new(),
                transition: RefCell::new(None),
            }),
        }
    }

    pub fn config(&self) -> &PanZoomConfig {
        &self.inner.config
    }

    pub fn state(&self) -> ViewState {
        self.inner.state.get()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.inner.lifecycle.get()
    }

    pub fn is_live(&self) -> bool {
        self.lifecycle().is_live()
    }

    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.inner.scheduler)
    }

    /// Viewport size, or `None` once inert.
    pub fn viewport_size(&self) -> Option<Size> {
        self.live_surface().map(|s| s.viewport_size())
    }

    /// Mark the viewport active and write the initial transform.
    pub fn initialize(&self) {
        if self.lifecycle() != Lifecycle::Created {
            return;
        }
        self.inner.lifecycle.set(Lifecycle::Active);
        self.apply_transform(false);
        log::debug!("Viewport engine initialized");
    }

    /// Return to scale 1 and no offset, animated.
    pub fn reset(&self) {
        if !self.is_live() {
            return;
        }
        self.inner.state.set(ViewState::IDENTITY);
        self.apply_transform(true);
        self.emit(ViewEvent::Reset);
    }

    /// Write the current state onto the graphic.
    ///
    /// Any pending transition-disable task is cancelled first. With
    /// `with_transition`, the transition is enabled and a new disable task is
    /// armed for `transition_duration`; without it, the transition is turned off
    /// immediately so continuous gestures are not animated.
    pub fn apply_transform(&self, with_transition: bool) {
        let Some(surface) = self.live_surface() else {
            return;
        };
        self.inner.transition.borrow_mut().take();

        let state = self.state();
        if with_transition {
            let duration = self.inner.config.transition_ms();
            surface.set_transition(Some(duration));
            surface.set_transform(&state);

            let surface_for_task = Rc::clone(surface);
            let task = self.inner.scheduler.schedule(
                duration,
                Box::new(move || surface_for_task.set_transition(None)),
            );
            *self.inner.transition.borrow_mut() = Some(task);
        } else {
            surface.set_transition(None);
            surface.set_transform(&state);
        }
    }

    /// Re-clamp the translation for the current scale and content bounds.
    pub fn constrain_pan(&self) {
        let Some(surface) = self.live_surface() else {
            return;
        };
        let content = surface.content_bounds().size;
        let viewport = surface.viewport_size();
        let constrained = constrain_translation(self.state(), content, viewport);
        self.inner.state.set(constrained);
    }

    /// Zoom by `delta` keeping the graphic point under `(x, y)` fixed.
    ///
    /// Returns `false` without side effects when the clamped scale is unchanged.
    pub fn zoom_at(&self, x: f64, y: f64, delta: f64) -> bool {
        if !self.is_live() || !delta.is_finite() {
            return false;
        }
        let state = self.state();
        let new_scale = self.inner.config.clamp_scale(state.scale + delta);
        if (new_scale - state.scale).abs() < f64::EPSILON {
            return false;
        }

        self.inner
            .state
            .set(zoom_about(state, Point::new(x, y), new_scale));
        self.constrain_pan();
        self.emit(ViewEvent::Zoom);
        self.apply_transform(false);
        true
    }

    /// Zoom in one step around the viewport center.
    pub fn zoom_in(&self) -> bool {
        self.zoom_centered(self.inner.config.zoom_step)
    }

    /// Zoom out one step around the viewport center.
    pub fn zoom_out(&self) -> bool {
        self.zoom_centered(-self.inner.config.zoom_step)
    }

    fn zoom_centered(&self, delta: f64) -> bool {
        let Some(size) = self.viewport_size() else {
            return false;
        };
        let center = size.center();
        self.zoom_at(center.x, center.y, delta)
    }

    /// Translate by a pointer or touch drag delta and emit `pan`.
    pub fn pan_by(&self, dx: f64, dy: f64) {
        self.translate(dx, dy, ViewEvent::Pan);
    }

    /// Translate by a keyboard step and emit `arrow`.
    pub fn nudge(&self, dx: f64, dy: f64) {
        self.translate(dx, dy, ViewEvent::Arrow);
    }

    fn translate(&self, dx: f64, dy: f64, event: ViewEvent) {
        if !self.is_live() || !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        let state = self.state();
        self.inner.state.set(ViewState {
            translate_x: state.translate_x + dx,
            translate_y: state.translate_y + dy,
            ..state
        });
        self.constrain_pan();
        self.emit(event);
        self.apply_transform(false);
    }

    /// Subscribe to an engine event. Returns `None` once inert.
    pub fn on<F>(&self, event: ViewEvent, listener: F) -> Option<ListenerId>
    where
        F: Fn(&ViewState) -> Result<(), ListenerError> + 'static,
    {
        self.is_live().then(|| self.inner.bus.on(event, listener))
    }

    pub fn off(&self, event: ViewEvent, id: ListenerId) -> bool {
        self.inner.bus.off(event, id)
    }

    pub fn listener_count(&self, event: ViewEvent) -> usize {
        self.inner.bus.listener_count(event)
    }

    /// Tear down: cancel the pending transition task, drop every subscription
    /// and become permanently inert. Safe to call repeatedly.
    pub fn destroy(&self) {
        if self.lifecycle() == Lifecycle::Destroyed {
            return;
        }
        self.inner.lifecycle.set(Lifecycle::Destroyed);
        self.inner.transition.borrow_mut().take();
        self.inner.bus.clear();
        log::debug!("Viewport engine destroyed");
    }

    fn emit(&self, event: ViewEvent) {
        if self.is_live() {
            self.inner.bus.emit(event, &self.state());
        }
    }

    fn live_surface(&self) -> Option<&Rc<dyn Surface>> {
        if self.is_live() {
            self.inner.surface.as_ref()
        } else {
            None
        }
    }
}

impl std::fmt::Debug for ViewportEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportEngine")
            .field("lifecycle", &self.lifecycle())
            .field("state", &self.state())
            .field("config", &self.inner.config)
            .field("bus", &self.inner.bus)
            .finish()
    }
}
