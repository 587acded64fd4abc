//! First-message handshake processing.
//!
//! After a transport opens, the server's first frame either accepts the
//! session (`pulse:connection_established`, carrying the socket id and the
//! activity timeout) or rejects it (`pulse:error` carrying a close-style
//! code, the in-band path for transports that cannot deliver close frames).
//! The orchestrator runs this before constructing a `Connection`.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{PulsewireError, Result};
use crate::protocol::close::{get_close_action, get_close_error, CloseAction, CloseInfo};
use crate::protocol::envelope::{decode_message, names};

/// Outcome of the first post-open frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Handshake {
    /// Session accepted.
    Connected {
        /// Socket id assigned by the server, passed to `Connection::new`.
        socket_id: String,
        /// How long the server allows the connection to stay silent before
        /// the client must probe it. The wire carries seconds.
        activity_timeout: Duration,
    },
    /// Session rejected in band. Classified through the close tables; both
    /// fields can be `None` when the payload carries no known code.
    Rejected {
        action: Option<CloseAction>,
        error: Option<PulsewireError>,
    },
}

#[derive(Debug, Deserialize)]
struct Established {
    socket_id: String,
    activity_timeout: u64,
}

/// Classify the first frame received after the transport opened.
pub fn process_handshake(raw: &str) -> Result<Handshake> {
    let env = decode_message(raw)?;

    match env.event.as_str() {
        names::CONNECTION_ESTABLISHED => {
            let est: Established = serde_json::from_value(env.data).map_err(|e| {
                PulsewireError::InvalidHandshake(format!("malformed established payload: {e}"))
            })?;
            Ok(Handshake::Connected {
                socket_id: est.socket_id,
                activity_timeout: Duration::from_secs(est.activity_timeout),
            })
        }
        names::ERROR => {
            // Tolerate arbitrary error payloads: no code means no
            // classification, same as an uncoded transport closure.
            let info: CloseInfo = serde_json::from_value(env.data).unwrap_or_default();
            Ok(Handshake::Rejected {
                action: get_close_action(&info),
                error: get_close_error(&info),
            })
        }
        other => Err(PulsewireError::InvalidHandshake(format!(
            "unexpected event: {other}"
        ))),
    }
}
