//! Connection event bus.
//!
//! The known event kinds form a closed enum; open-ended vocabularies travel
//! as data inside the variants instead of as dispatch keys (application
//! event names inside [`MessageEvent`], close-code action names inside
//! `Action`). The dispatch table itself therefore stays fixed while the
//! application event space stays unlimited.

use std::collections::HashMap;

use serde_json::Value;

use pulsewire_core::protocol::close::{CloseAction, CloseInfo};
use pulsewire_core::PulsewireError;

/// Payload seen by generic `message` listeners: event name plus data, with
/// any channel scoping already stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub event: String,
    pub data: Value,
}

/// Events emitted by a `Connection` to its listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    /// Application message, forwarded verbatim.
    Message(MessageEvent),
    /// The transport asked for a keepalive probe.
    PingRequest,
    /// Server-side keepalive probe (`pulse:ping`).
    Ping,
    /// Server answer to a keepalive probe (`pulse:pong`).
    Pong,
    /// Any failure: parse, server-reported, transport-level, or
    /// close-code-derived.
    Error(PulsewireError),
    /// The channel closed; raw close info passed through unchanged.
    Closed(CloseInfo),
    /// Close-code follow-up signal, named by [`CloseAction::as_str`].
    Action(CloseAction),
}

/// Dispatch key for listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Message,
    PingRequest,
    Ping,
    Pong,
    Error,
    Closed,
    Action,
}

impl ConnectionEvent {
    /// Dispatch key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            ConnectionEvent::Message(_) => EventKind::Message,
            ConnectionEvent::PingRequest => EventKind::PingRequest,
            ConnectionEvent::Ping => EventKind::Ping,
            ConnectionEvent::Pong => EventKind::Pong,
            ConnectionEvent::Error(_) => EventKind::Error,
            ConnectionEvent::Closed(_) => EventKind::Closed,
            ConnectionEvent::Action(_) => EventKind::Action,
        }
    }
}

/// Handle returned by `bind`/`bind_all`, used to unbind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ConnectionEvent) + Send>;

/// Ordered listener registry.
///
/// Delivery order for one event: `bind_all` listeners first, then the
/// listeners bound to the event's kind, each group in insertion order. An
/// event fired before a listener was bound is never replayed to it. An event
/// with no listeners at all is dropped silently.
#[derive(Default)]
pub struct EventDispatcher {
    channels: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
    global: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one event kind.
    pub fn bind(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&ConnectionEvent) + Send + 'static,
    ) -> ListenerId {
        let id = self.next_listener_id();
        self.channels
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Register a listener for every event.
    pub fn bind_all(
        &mut self,
        listener: impl FnMut(&ConnectionEvent) + Send + 'static,
    ) -> ListenerId {
        let id = self.next_listener_id();
        self.global.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously bound listener. Returns whether it was found.
    pub fn unbind(&mut self, id: ListenerId) -> bool {
        let before = self.global.len();
        self.global.retain(|(lid, _)| *lid != id);
        if self.global.len() != before {
            return true;
        }
        for listeners in self.channels.values_mut() {
            let before = listeners.len();
            listeners.retain(|(lid, _)| *lid != id);
            if listeners.len() != before {
                return true;
            }
        }
        false
    }

    /// Deliver one event to all matching listeners, synchronously.
    pub fn emit(&mut self, event: &ConnectionEvent) {
        for (_, listener) in self.global.iter_mut() {
            listener(event);
        }
        if let Some(listeners) = self.channels.get_mut(&event.kind()) {
            for (_, listener) in listeners.iter_mut() {
                listener(event);
            }
        }
    }

    fn next_listener_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn record(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> impl FnMut(&ConnectionEvent) + Send {
        let log = Arc::clone(log);
        move |_| log.lock().unwrap().push(tag)
    }

    #[test]
    fn delivers_in_insertion_order_global_first() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        dispatcher.bind(EventKind::Ping, record(&log, "kind-1"));
        dispatcher.bind_all(record(&log, "global"));
        dispatcher.bind(EventKind::Ping, record(&log, "kind-2"));

        dispatcher.emit(&ConnectionEvent::Ping);

        assert_eq!(*log.lock().unwrap(), vec!["global", "kind-1", "kind-2"]);
    }

    #[test]
    fn unbind_stops_delivery() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        let id = dispatcher.bind(EventKind::Pong, record(&log, "bound"));
        dispatcher.emit(&ConnectionEvent::Pong);
        assert!(dispatcher.unbind(id));
        assert!(!dispatcher.unbind(id));
        dispatcher.emit(&ConnectionEvent::Pong);

        assert_eq!(*log.lock().unwrap(), vec!["bound"]);
    }

    #[test]
    fn other_kinds_do_not_fire() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        dispatcher.bind(EventKind::Ping, record(&log, "ping"));
        dispatcher.emit(&ConnectionEvent::Pong);

        assert!(log.lock().unwrap().is_empty());
    }
}
