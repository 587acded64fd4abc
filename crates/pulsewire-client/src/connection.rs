//! Connection: transport-to-application event translation.
//!
//! A thin, stateless facade over one owned transport. Inbound transport
//! events are decoded through `pulsewire_core::protocol` and re-emitted as
//! typed [`ConnectionEvent`]s; outbound calls delegate straight to the
//! transport with no transformation beyond envelope construction. The only
//! state a connection holds is its listener registry; connecting, closing
//! and reconnecting are owned by the orchestrator that drives it.

use serde_json::Value;

use pulsewire_core::protocol::close::{get_close_action, get_close_error, CloseInfo};
use pulsewire_core::protocol::envelope::{decode_message, encode_message, names, Envelope};
use pulsewire_core::PulsewireError;

use crate::events::{ConnectionEvent, EventDispatcher, EventKind, ListenerId, MessageEvent};
use crate::transport::{Transport, TransportEvent};

/// Facade between one transport and application-level listeners.
pub struct Connection {
    id: String,
    transport: Box<dyn Transport>,
    dispatcher: EventDispatcher,
}

impl Connection {
    /// Wrap an already-established transport. `id` is the socket id the
    /// server assigned during the handshake.
    pub fn new(id: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            id: id.into(),
            transport,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Server-assigned socket id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register a listener for one event kind.
    pub fn bind(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&ConnectionEvent) + Send + 'static,
    ) -> ListenerId {
        self.dispatcher.bind(kind, listener)
    }

    /// Register a listener for every event.
    pub fn bind_all(
        &mut self,
        listener: impl FnMut(&ConnectionEvent) + Send + 'static,
    ) -> ListenerId {
        self.dispatcher.bind_all(listener)
    }

    /// Remove a previously bound listener.
    pub fn unbind(&mut self, id: ListenerId) -> bool {
        self.dispatcher.unbind(id)
    }

    /// Whether the transport runs its own keepalive probes. Reflects the
    /// transport's current answer on every call; nothing is cached.
    pub fn supports_ping(&self) -> bool {
        self.transport.supports_ping()
    }

    /// Hand raw text to the transport. Returns exactly the transport's
    /// verdict; no retry, no queuing.
    pub fn send(&mut self, data: &str) -> bool {
        self.transport.send(data)
    }

    /// Build an envelope and send it. The `channel` key is entirely absent
    /// from the wire when no channel is given.
    pub fn send_event(&mut self, event: &str, data: Value, channel: Option<&str>) -> bool {
        let envelope = Envelope {
            event: event.to_owned(),
            data,
            channel: channel.map(str::to_owned),
        };
        match encode_message(&envelope) {
            Ok(payload) => self.send(&payload),
            Err(e) => {
                tracing::debug!(event = %envelope.event, "dropping unencodable event: {e}");
                false
            }
        }
    }

    /// Close the transport. Safe to call when already closed.
    pub fn close(&mut self) {
        self.transport.close();
    }

    /// Translate one transport event. The socket driver calls this for each
    /// event, in arrival order; every emission happens synchronously before
    /// this returns.
    pub fn handle_transport_event(&mut self, event: TransportEvent) {
        match event {
            // Handshake completes before a Connection exists.
            TransportEvent::Open => {}
            TransportEvent::Message { data } => self.handle_message(data),
            TransportEvent::PingRequest => self.dispatcher.emit(&ConnectionEvent::PingRequest),
            TransportEvent::Closed(info) => self.handle_closed(info),
            TransportEvent::Error(error) => self
                .dispatcher
                .emit(&ConnectionEvent::Error(PulsewireError::WebSocket { error })),
        }
    }

    fn handle_message(&mut self, raw: String) {
        let envelope = match decode_message(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                self.dispatcher.emit(&ConnectionEvent::Error(e));
                return;
            }
        };

        match envelope.event.as_str() {
            names::ERROR => self.dispatcher.emit(&ConnectionEvent::Error(
                PulsewireError::Server {
                    data: envelope.data,
                },
            )),
            names::PING => self.dispatcher.emit(&ConnectionEvent::Ping),
            names::PONG => self.dispatcher.emit(&ConnectionEvent::Pong),
            _ => {
                // Generic listeners see event + data only; channel scoping
                // is the subscription layer's concern.
                self.dispatcher.emit(&ConnectionEvent::Message(MessageEvent {
                    event: envelope.event,
                    data: envelope.data,
                }));
            }
        }
    }

    fn handle_closed(&mut self, info: CloseInfo) {
        // The closure itself is always surfaced, classified or not. Closing
        // is transport-initiated and terminal here: this layer never calls
        // the transport's close primitive in response.
        self.dispatcher.emit(&ConnectionEvent::Closed(info.clone()));

        if let Some(action) = get_close_action(&info) {
            tracing::debug!(code = ?info.code, action = action.as_str(), "close code classified");
            self.dispatcher.emit(&ConnectionEvent::Action(action));
        }
        if let Some(error) = get_close_error(&info) {
            self.dispatcher.emit(&ConnectionEvent::Error(error));
        }
    }
}
