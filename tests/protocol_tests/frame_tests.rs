//! Frame Reader Tests
//!
//! Round trips and size limits through the public API.

use std::io::Cursor;

use jsonkv::protocol::{decode_message, encode_message, FrameReader, Message, Status, TERMINATOR};
use jsonkv::{Config, KvError, OversizePolicy};

fn framed(messages: &[Message]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for msg in messages {
        bytes.extend(encode_message(msg).unwrap());
        bytes.push(TERMINATOR);
    }
    bytes
}

#[test]
fn test_round_trip_every_status() {
    let messages: Vec<Message> = Status::ALL
        .iter()
        .map(|&s| Message::new(format!("key-{}", s.index()), format!("value {}", s), s))
        .collect();

    let mut reader = FrameReader::new(Cursor::new(framed(&messages)));
    for expected in &messages {
        let frame = reader.read_frame().unwrap().unwrap();
        assert_eq!(&decode_message(&frame).unwrap(), expected);
    }
    assert!(reader.read_frame().unwrap().is_none());
}

#[test]
fn test_round_trip_large_value() {
    let msg = Message::put("big", "x".repeat(100_000));
    let mut reader = FrameReader::new(Cursor::new(framed(&[msg.clone()])));

    let frame = reader.read_frame().unwrap().unwrap();
    assert_eq!(decode_message(&frame).unwrap(), msg);
}

#[test]
fn test_default_cap_truncates_at_131072() {
    let mut bytes = vec![b'z'; 200_000];
    bytes.push(TERMINATOR);
    let mut reader = FrameReader::new(Cursor::new(bytes));

    let frame = reader.read_frame().unwrap().unwrap();
    assert_eq!(frame.len(), 131_072);
    assert!(frame.iter().all(|&b| b == b'z'));
}

#[test]
fn test_truncated_json_is_malformed() {
    let msg = Message::put("big", "y".repeat(500));
    let config = Config::builder()
        .frame_chunk_size(64)
        .max_frame_size(256)
        .build();
    let mut reader = FrameReader::with_config(Cursor::new(framed(&[msg])), &config);

    let frame = reader.read_frame().unwrap().unwrap();
    assert_eq!(frame.len(), 256);
    assert!(matches!(
        decode_message(&frame),
        Err(KvError::MalformedMessage(_))
    ));
}

#[test]
fn test_reject_policy_from_config() {
    let msg = Message::put("big", "y".repeat(500));
    let config = Config::builder()
        .frame_chunk_size(64)
        .max_frame_size(256)
        .oversize_policy(OversizePolicy::Reject)
        .build();
    let mut reader = FrameReader::with_config(Cursor::new(framed(&[msg])), &config);

    assert!(matches!(
        reader.read_frame(),
        Err(KvError::FrameTooLarge { limit: 256 })
    ));
}

#[test]
fn test_frames_under_cap_unaffected_by_reject() {
    let messages = vec![Message::put("a", "1"), Message::get("a")];
    let config = Config::builder()
        .frame_chunk_size(16)
        .max_frame_size(64)
        .oversize_policy(OversizePolicy::Reject)
        .build();
    let mut reader = FrameReader::with_config(Cursor::new(framed(&messages)), &config);

    for expected in &messages {
        let frame = reader.read_frame().unwrap().unwrap();
        assert_eq!(&decode_message(&frame).unwrap(), expected);
    }
}
