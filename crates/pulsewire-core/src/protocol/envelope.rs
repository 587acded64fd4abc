//! Wire envelope (JSON).
//!
//! Every frame on the text channel is `{"event": ..., "data": ...}` with an
//! optional `"channel"` key for channel-scoped events. Event names under the
//! `pulse:` prefix are reserved for protocol control messages; all other
//! names belong to the application.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PulsewireError, Result};

/// Reserved event-name namespace prefix for protocol control messages.
pub const RESERVED_PREFIX: &str = "pulse:";

/// Reserved event names.
pub mod names {
    /// Server-reported protocol error.
    pub const ERROR: &str = "pulse:error";
    /// Server keepalive probe.
    pub const PING: &str = "pulse:ping";
    /// Server answer to a client keepalive probe.
    pub const PONG: &str = "pulse:pong";
    /// First frame of an accepted session.
    pub const CONNECTION_ESTABLISHED: &str = "pulse:connection_established";
}

/// Canonical wire message shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Event name. Any non-empty string; unknown names are not rejected.
    pub event: String,
    /// Arbitrary JSON payload.
    #[serde(default)]
    pub data: Value,
    /// Present only for channel-scoped events. The key is entirely absent
    /// on the wire when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

/// Decode a raw text frame into an [`Envelope`].
///
/// Fails with [`PulsewireError::MessageParse`] (carrying the raw text) when
/// the frame is not JSON or not an object with an `event` field. A `data`
/// field that is itself a string holding valid JSON is unwrapped one level
/// (the server double-encodes payloads on some events); a string that does
/// not parse stays a string.
pub fn decode_message(raw: &str) -> Result<Envelope> {
    let mut env: Envelope =
        serde_json::from_str(raw).map_err(|_| PulsewireError::MessageParse {
            data: raw.to_owned(),
        })?;

    if let Value::String(inner) = &env.data {
        if let Ok(parsed) = serde_json::from_str::<Value>(inner) {
            env.data = parsed;
        }
    }

    Ok(env)
}

/// Encode an [`Envelope`] to wire text.
///
/// `data` is serialized exactly once; callers must not pre-serialize it.
pub fn encode_message(env: &Envelope) -> Result<String> {
    serde_json::to_string(env).map_err(|e| PulsewireError::Encode(e.to_string()))
}
