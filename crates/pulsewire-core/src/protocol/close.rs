//! Close-code classification.
//!
//! The service reserves the 4000+ close-code range to steer client behavior
//! after a closure: whether to reconnect, how urgently, and whether the
//! closure doubles as an error. The tables here are fixed, process-wide
//! constant data. Classification is a pure function of the numeric code,
//! safe to share across every connection.

use serde::Deserialize;

use crate::error::PulsewireError;

/// Raw close metadata reported by a transport.
///
/// Transports that cannot report close codes deliver an empty value; both
/// classification functions treat that as "no classification, no error".
/// Handshake rejections carry the same shape in band with the reason under
/// `message`, hence the alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CloseInfo {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default, alias = "message")]
    pub reason: Option<String>,
}

/// Follow-up behavior requested by a close code.
///
/// Interpreted by the orchestrator that owns reconnection policy; this crate
/// only names the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Reconnect only over TLS.
    SslOnly,
    /// Do not reconnect.
    Refused,
    /// Reconnect after a backoff delay.
    Backoff,
    /// Reconnect immediately.
    Retry,
}

impl CloseAction {
    /// Event name used when the action is re-emitted.
    pub fn as_str(self) -> &'static str {
        match self {
            CloseAction::SslOnly => "ssl_only",
            CloseAction::Refused => "refused",
            CloseAction::Backoff => "backoff",
            CloseAction::Retry => "retry",
        }
    }
}

/// Classify a close code into a follow-up action.
///
/// Codes outside the table, or a missing code, yield `None`: an ordinary,
/// unclassified closure.
pub fn get_close_action(info: &CloseInfo) -> Option<CloseAction> {
    let code = info.code?;
    if code < 4000 {
        // 1002 protocol error, 1003 unsupported data, 1004 reserved: the
        // transport conversation itself went wrong, so back off before the
        // next attempt. Every other pre-application code is unclassified.
        if (1002..=1004).contains(&code) {
            Some(CloseAction::Backoff)
        } else {
            None
        }
    } else if code == 4000 {
        Some(CloseAction::SslOnly)
    } else if code < 4100 {
        Some(CloseAction::Refused)
    } else if code < 4200 {
        Some(CloseAction::Backoff)
    } else if code < 4300 {
        Some(CloseAction::Retry)
    } else {
        Some(CloseAction::Refused)
    }
}

/// Build the error object for an abnormal closure.
///
/// Only codes that represent a failure produce one: the 1002-1006 transport
/// band (1005 excluded, it means "no status present") and the entire 4000+
/// application band. Normal closures, unclassified codes, and a missing code
/// yield `None`.
pub fn get_close_error(info: &CloseInfo) -> Option<PulsewireError> {
    let code = info.code?;
    match code {
        1002..=1004 | 1006 => Some(closed_error(code, info)),
        code if code >= 4000 => Some(closed_error(code, info)),
        _ => None,
    }
}

fn closed_error(code: u16, info: &CloseInfo) -> PulsewireError {
    PulsewireError::Closed {
        code,
        message: info.reason.clone().unwrap_or_default(),
    }
}
