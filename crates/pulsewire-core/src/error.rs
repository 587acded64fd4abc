//! Shared error type across pulsewire crates.

use serde_json::Value;
use thiserror::Error;

/// Stable error kind tags (the `type` field the protocol exposes to
/// application listeners).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Server-reported protocol error, including close-code-derived ones.
    PulseError,
    /// Wire payload could not be decoded.
    MessageParseError,
    /// Transport-level failure.
    WebSocketError,
    /// First post-open frame was not a valid handshake.
    HandshakeError,
    /// Outbound envelope could not be serialized.
    EncodeError,
}

impl ErrorKind {
    /// String representation used when errors cross an API boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::PulseError => "PulseError",
            ErrorKind::MessageParseError => "MessageParseError",
            ErrorKind::WebSocketError => "WebSocketError",
            ErrorKind::HandshakeError => "HandshakeError",
            ErrorKind::EncodeError => "EncodeError",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PulsewireError>;

/// Unified error type used by core and client.
///
/// Connection-level failures are emitted as `error` events rather than
/// returned to the caller, so the event-surfaced variants carry the payload
/// an application listener expects to see.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PulsewireError {
    /// Wire payload was not a valid envelope. `data` is the raw offending
    /// text, passed through untouched.
    #[error("message parse error: {data}")]
    MessageParse { data: String },

    /// Error reported by the server inside a `pulse:error` frame.
    #[error("server error: {data}")]
    Server { data: Value },

    /// Failure reported by the transport itself, passed through opaquely.
    #[error("websocket error: {error}")]
    WebSocket { error: Value },

    /// Abnormal closure, classified from the close code.
    #[error("{message} (close code {code})")]
    Closed { code: u16, message: String },

    /// First frame after opening was not a recognizable handshake.
    #[error("invalid handshake: {0}")]
    InvalidHandshake(String),

    /// Outbound envelope could not be serialized.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl PulsewireError {
    /// Map to the stable kind tag.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PulsewireError::MessageParse { .. } => ErrorKind::MessageParseError,
            PulsewireError::Server { .. } | PulsewireError::Closed { .. } => ErrorKind::PulseError,
            PulsewireError::WebSocket { .. } => ErrorKind::WebSocketError,
            PulsewireError::InvalidHandshake(_) => ErrorKind::HandshakeError,
            PulsewireError::Encode(_) => ErrorKind::EncodeError,
        }
    }
}
