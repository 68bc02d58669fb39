//! Named-event notification bus.
//!
//! Listeners are delivered synchronously in registration order. Dispatch
//! iterates a snapshot of the listener list, so a listener may subscribe or
//! unsubscribe during delivery without affecting the current emit. A failing
//! listener is logged and skipped; it never stops delivery to the rest and
//! never fails the emitting operation.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::{EventNameError, ListenerError};
use crate::state::ViewState;

/// Events emitted by the viewport engine, each carrying the resulting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewEvent {
    Reset,
    Zoom,
    Pan,
    Arrow,
}

impl ViewEvent {
    pub const ALL: [ViewEvent; 4] = [ViewEvent::Reset, ViewEvent::Zoom, ViewEvent::Pan, ViewEvent::Arrow];

    pub fn name(self) -> &'static str {
        match self {
            ViewEvent::Reset => "reset",
            ViewEvent::Zoom => "zoom",
            ViewEvent::Pan => "pan",
            ViewEvent::Arrow => "arrow",
        }
    }
}

impl fmt::Display for ViewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewEvent {
    type Err = EventNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewEvent::ALL
            .into_iter()
            .find(|event| event.name() == s)
            .ok_or_else(|| EventNameError(s.to_string()))
    }
}

pub type Listener = Rc<dyn Fn(&ViewState) -> Result<(), ListenerError>>;

/// Token returned by [`EventBus::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<BTreeMap<ViewEvent, Vec<(ListenerId, Listener)>>>,
    next_id: Cell<u64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&self, event: ViewEvent, listener: F) -> ListenerId
    where
        F: Fn(&ViewState) -> Result<(), ListenerError> + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let listener: Listener = Rc::new(listener);
        self.listeners
            .borrow_mut()
            .entry(event)
            .or_default()
            .push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn off(&self, event: ViewEvent, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let Some(list) = listeners.get_mut(&event) else {
            return false;
        };
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        list.len() != before
    }

    /// Deliver `payload` to every listener of `event`. Returns how many
    /// listeners completed without error.
    pub fn emit(&self, event: ViewEvent, payload: &ViewState) -> usize {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .get(&event)
            .map(|list| list.iter().map(|(_, l)| Rc::clone(l)).collect())
            .unwrap_or_default();

        let mut delivered = 0;
        for listener in snapshot {
            match listener(payload) {
                Ok(()) => delivered += 1,
                Err(e) => log::error!("'{}' listener error: {}", event, e),
            }
        }
        delivered
    }

    pub fn listener_count(&self, event: ViewEvent) -> usize {
        self.listeners.borrow().get(&event).map_or(0, Vec::len)
    }

    /// Drop every subscription on every event.
    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<ViewEvent, usize> = self
            .listeners
            .borrow()
            .iter()
            .map(|(event, list)| (*event, list.len()))
            .collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Listener) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_for_make = Rc::clone(&log);
        let make = move |tag: &str| -> Listener {
            let log = Rc::clone(&log_for_make);
            let tag = tag.to_string();
            Rc::new(move |state: &ViewState| {
                log.borrow_mut().push(format!("{}@{}", tag, state.scale));
                Ok(())
            })
        };
        (log, make)
    }

    #[test]
    fn event_names_round_trip_through_from_str() {
        for event in ViewEvent::ALL {
            assert_eq!(event.name().parse::<ViewEvent>(), Ok(event));
        }
        assert_eq!(
            "scroll".parse::<ViewEvent>(),
            Err(EventNameError("scroll".to_string()))
        );
    }

    #[test]
    fn emit_delivers_in_registration_order() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let first = make("a");
        let second = make("b");
        bus.on(ViewEvent::Zoom, move |s| first(s));
        bus.on(ViewEvent::Zoom, move |s| second(s));

        let state = ViewState {
            scale: 2.0,
            ..ViewState::IDENTITY
        };
        assert_eq!(bus.emit(ViewEvent::Zoom, &state), 2);
        assert_eq!(*log.borrow(), vec!["a@2", "b@2"]);
    }

    #[test]
    fn emit_only_reaches_listeners_of_that_event() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let on_pan = make("pan");
        bus.on(ViewEvent::Pan, move |s| on_pan(s));

        assert_eq!(bus.emit(ViewEvent::Zoom, &ViewState::IDENTITY), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn failing_listener_does_not_stop_delivery() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let before = make("before");
        let after = make("after");
        bus.on(ViewEvent::Reset, move |s| before(s));
        bus.on(ViewEvent::Reset, |_| Err(ListenerError("boom".into())));
        bus.on(ViewEvent::Reset, move |s| after(s));

        assert_eq!(bus.emit(ViewEvent::Reset, &ViewState::IDENTITY), 2);
        assert_eq!(*log.borrow(), vec!["before@1", "after@1"]);
    }

    #[test]
    fn off_removes_only_the_given_listener() {
        let bus = EventBus::new();
        let keep = bus.on(ViewEvent::Pan, |_| Ok(()));
        let drop_me = bus.on(ViewEvent::Pan, |_| Ok(()));

        assert!(bus.off(ViewEvent::Pan, drop_me));
        assert!(!bus.off(ViewEvent::Pan, drop_me));
        assert!(!bus.off(ViewEvent::Zoom, keep));
        assert_eq!(bus.listener_count(ViewEvent::Pan), 1);
    }

    #[test]
    fn listener_may_unsubscribe_itself_during_emit() {
        let bus = Rc::new(EventBus::new());
        let calls = Rc::new(Cell::new(0));
        let own_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

        let id = bus.on(ViewEvent::Arrow, {
            let bus = Rc::clone(&bus);
            let calls = Rc::clone(&calls);
            let own_id = Rc::clone(&own_id);
            move |_| {
                calls.set(calls.get() + 1);
                if let Some(id) = own_id.get() {
                    bus.off(ViewEvent::Arrow, id);
                }
                Ok(())
            }
        });
        own_id.set(Some(id));

        bus.emit(ViewEvent::Arrow, &ViewState::IDENTITY);
        bus.emit(ViewEvent::Arrow, &ViewState::IDENTITY);
        assert_eq!(calls.get(), 1);
        assert_eq!(bus.listener_count(ViewEvent::Arrow), 0);
    }

    #[test]
    fn clear_drops_all_subscriptions() {
        let bus = EventBus::new();
        for event in ViewEvent::ALL {
            bus.on(event, |_| Ok(()));
        }
        bus.clear();
        for event in ViewEvent::ALL {
            assert_eq!(bus.listener_count(event), 0);
            assert_eq!(bus.emit(event, &ViewState::IDENTITY), 0);
        }
    }
}
