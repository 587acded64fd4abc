//! Handshake classification tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use pulsewire_core::error::ErrorKind;
use pulsewire_core::protocol::close::CloseAction;
use pulsewire_core::protocol::handshake::{process_handshake, Handshake};
use pulsewire_core::PulsewireError;

#[test]
fn accepts_established_frame() {
    // The live service double-encodes the payload; the decoder unwraps it.
    let raw = r#"{"event":"pulse:connection_established","data":"{\"socket_id\":\"49581.5678\",\"activity_timeout\":120}"}"#;

    match process_handshake(raw).unwrap() {
        Handshake::Connected {
            socket_id,
            activity_timeout,
        } => {
            assert_eq!(socket_id, "49581.5678");
            assert_eq!(activity_timeout, Duration::from_secs(120));
        }
        other => panic!("expected Connected, got {other:?}"),
    }
}

#[test]
fn accepts_plain_object_payload() {
    let raw = r#"{"event":"pulse:connection_established","data":{"socket_id":"1.1","activity_timeout":30}}"#;

    assert_eq!(
        process_handshake(raw).unwrap(),
        Handshake::Connected {
            socket_id: "1.1".to_owned(),
            activity_timeout: Duration::from_secs(30),
        }
    );
}

#[test]
fn rejects_error_frame_through_close_tables() {
    let raw = r#"{"event":"pulse:error","data":{"code":4100,"message":"over capacity"}}"#;

    match process_handshake(raw).unwrap() {
        Handshake::Rejected { action, error } => {
            assert_eq!(action, Some(CloseAction::Backoff));
            assert_eq!(
                error,
                Some(PulsewireError::Closed {
                    code: 4100,
                    message: "over capacity".to_owned(),
                })
            );
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn error_frame_without_code_classifies_nothing() {
    let raw = r#"{"event":"pulse:error","data":{"message":"nope"}}"#;

    assert_eq!(
        process_handshake(raw).unwrap(),
        Handshake::Rejected {
            action: None,
            error: None,
        }
    );
}

#[test]
fn established_without_timeout_is_invalid() {
    let raw = r#"{"event":"pulse:connection_established","data":{"socket_id":"1.1"}}"#;

    let err = process_handshake(raw).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::HandshakeError);
}

#[test]
fn unexpected_event_is_invalid() {
    let raw = r#"{"event":"random","data":{}}"#;

    let err = process_handshake(raw).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::HandshakeError);
}

#[test]
fn unparsable_frame_is_a_parse_error() {
    let err = process_handshake("garbage").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::MessageParseError);
}
