//! Transport capability.
//!
//! The connection consumes an injected transport rather than implementing
//! one; concrete channels (a WebSocket, a fallback stream, a test double)
//! live with their drivers. The driver that owns the socket loop converts
//! inbound frames into [`TransportEvent`]s, in arrival order, and hands them
//! to `Connection::handle_transport_event`.

use serde_json::Value;

use pulsewire_core::protocol::close::CloseInfo;

/// Operations a concrete transport must expose.
pub trait Transport: Send {
    /// Queue `data` for transmission. `true` means the transport accepted
    /// it; `false` means it was rejected (e.g. the channel is not open).
    fn send(&mut self, data: &str) -> bool;

    /// Close the underlying channel. Must be safe to call when already
    /// closed.
    fn close(&mut self);

    /// Whether the transport runs its own keepalive probes.
    fn supports_ping(&self) -> bool;
}

/// Events a transport delivers upward.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// The channel is open. Carries nothing at this layer; the handshake
    /// completes before a `Connection` exists.
    Open,
    /// A text frame arrived.
    Message { data: String },
    /// The transport wants an application-level keepalive probe sent.
    PingRequest,
    /// The channel closed. `CloseInfo::default()` when the transport cannot
    /// report close codes.
    Closed(CloseInfo),
    /// Transport-level failure, opaque to this layer.
    Error(Value),
}
