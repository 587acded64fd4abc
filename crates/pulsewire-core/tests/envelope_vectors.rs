//! Envelope codec vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use pulsewire_core::protocol::envelope::{decode_message, encode_message, Envelope};
use pulsewire_core::PulsewireError;

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn envelope_vectors() {
    let files = [
        "envelope_min.json",
        "envelope_no_data.json",
        "envelope_channel.json",
        "envelope_nested_data.json",
        "envelope_string_data.json",
        "envelope_not_json.json",
        "envelope_missing_event.json",
        "envelope_not_object.json",
    ];

    for f in files {
        let v = load(f);
        let res = decode_message(&v.raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.kind().as_str(), err.kind, "vector={}", v.description);
            continue;
        }

        let env = res.expect("expected ok envelope");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(env.event, ex["event"].as_str().unwrap(), "vector={}", v.description);
        assert_eq!(env.data, ex["data"], "vector={}", v.description);

        match ex.get("channel").and_then(|c| c.as_str()) {
            Some(chan) => {
                assert_eq!(env.channel.as_deref(), Some(chan), "vector={}", v.description)
            }
            None => assert!(env.channel.is_none(), "vector={}", v.description),
        }
    }
}

#[test]
fn parse_error_carries_raw_payload() {
    let raw = "this is not json";
    match decode_message(raw) {
        Err(PulsewireError::MessageParse { data }) => assert_eq!(data, raw),
        other => panic!("expected MessageParse, got {other:?}"),
    }
}

#[test]
fn encode_is_exact() {
    let env = Envelope {
        event: "test".to_owned(),
        data: serde_json::json!([1, 2, 3]),
        channel: None,
    };
    assert_eq!(encode_message(&env).unwrap(), r#"{"event":"test","data":[1,2,3]}"#);
}

#[test]
fn encode_with_channel_adds_only_the_channel_key() {
    let env = Envelope {
        event: "test".to_owned(),
        data: serde_json::json!([1, 2, 3]),
        channel: Some("chan".to_owned()),
    };
    assert_eq!(
        encode_message(&env).unwrap(),
        r#"{"event":"test","data":[1,2,3],"channel":"chan"}"#
    );
}
