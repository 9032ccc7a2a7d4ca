use super::*;
use crate::utils::{DecodeError, Error};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde_json::json;

fn b64(raw: &str) -> String {
    BASE64_STANDARD.encode(raw)
}

#[test]
fn test_produce_frame_decodes_to_envelope() {
    let frame = encode(RequestType::Produce, "orders", "hello").unwrap();
    let envelope: Envelope = decode(frame.as_bytes()).unwrap();

    assert_eq!(envelope.kind, RequestType::Produce);
    assert_eq!(envelope.topic, "orders");
    assert_eq!(envelope.body, "hello");
}

#[test]
fn test_consume_frame_has_empty_body() {
    let frame = encode_envelope(&Envelope::consume("orders")).unwrap();
    let envelope: Envelope = decode(frame.as_bytes()).unwrap();

    assert_eq!(envelope, Envelope::new(RequestType::Consume, "orders", ""));
}

#[test]
fn test_wire_json_uses_lowercase_keys_and_uppercase_type() {
    let frame = encode(RequestType::Produce, "orders", "hello").unwrap();
    let raw = BASE64_STANDARD.decode(frame).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();

    assert_eq!(
        value,
        json!({ "type": "PRODUCE", "body": "hello", "topic": "orders" })
    );
}

#[test]
fn test_round_trip_preserves_awkward_strings() {
    let cases = [
        (RequestType::Produce, "", ""),
        (RequestType::Produce, "a/b.c", "line one\nline \"two\""),
        (RequestType::Consume, "émojis-🦀", ""),
        (RequestType::Produce, "t", "{\"nested\": [1, 2, 3]}"),
    ];

    for (kind, topic, body) in cases {
        let frame = encode(kind, topic, body).unwrap();
        let envelope: Envelope = decode(frame.as_bytes()).unwrap();
        assert_eq!(envelope, Envelope::new(kind, topic, body));
    }
}

#[test]
fn test_decode_message_keeps_broker_fields() {
    let frame = b64(r#"{"topic":"orders","body":"hello","offset":42,"ts":"now"}"#);
    let msg: Message = decode(frame.as_bytes()).unwrap();

    assert_eq!(msg.topic, "orders");
    assert_eq!(msg.body, "hello");
    assert_eq!(msg.get("offset"), Some(&json!(42)));
    assert_eq!(msg.get("ts"), Some(&json!("now")));
    assert!(msg.get("topic").is_none());
}

#[test]
fn test_decode_message_defaults_missing_fields() {
    let frame = b64("{}");
    let msg: Message = decode(frame.as_bytes()).unwrap();
    assert_eq!(msg, Message::default());
}

#[test]
fn test_decode_rejects_invalid_base64() {
    let err = decode::<Message>(b"not base64!!").unwrap_err();
    assert!(matches!(err, Error::Decoding(DecodeError::Base64(_))));
}

#[test]
fn test_decode_rejects_invalid_json() {
    let frame = b64("{\"topic\": ");
    let err = decode::<Message>(frame.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Decoding(DecodeError::Json(_))));
}

#[test]
fn test_decode_rejects_non_object_json() {
    let frame = b64("\"just a string\"");
    let err = decode::<Message>(frame.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Decoding(DecodeError::Json(_))));
}

#[test]
fn test_truncated_frame_fails_to_decode() {
    let frame = encode(RequestType::Produce, "orders", "hello").unwrap();
    let half = &frame.as_bytes()[..frame.len() / 2];
    assert!(decode::<Envelope>(half).is_err());
}

#[test]
fn test_heartbeat_is_exactly_one_byte() {
    assert!(is_heartbeat(HEARTBEAT_LEN));
    assert!(!is_heartbeat(0));
    assert!(!is_heartbeat(2));
}
