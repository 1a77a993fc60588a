//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────────────────────────────────────────┬──────┐
//! │ {"key":"..","value":"..","status":N}          │ 0x0D │
//! └──────────────────────────────────────────────┴──────┘
//! ```
//!
//! Member order is not significant when decoding. Unknown members are
//! ignored. String escaping guarantees the body never contains a raw
//! carriage return, so the terminator is unambiguous.

use std::io::{Read, Write};

use serde_json::Value;

use crate::error::{KvError, Result};
use super::frame::{FrameReader, TERMINATOR};
use super::Message;

// =============================================================================
// Message Encoding/Decoding
// =============================================================================

/// Encode a message to its JSON body (without terminator)
pub fn encode_message(message: &Message) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(message)?)
}

/// Decode a message from a raw frame
///
/// Fails with `MalformedMessage` on invalid JSON, a non-object body, a
/// missing or mistyped member, or a status outside the enumeration.
pub fn decode_message(bytes: &[u8]) -> Result<Message> {
    let value: Value = serde_json::from_slice(bytes)?;

    if !value.is_object() {
        return Err(KvError::MalformedMessage(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read the next message from a framed stream
///
/// Returns `Ok(None)` once the stream has ended cleanly.
pub fn read_message<R: Read>(reader: &mut FrameReader<R>) -> Result<Option<Message>> {
    match reader.read_frame()? {
        Some(frame) => decode_message(&frame).map(Some),
        None => Ok(None),
    }
}

/// Write a message followed by the terminator, then flush
pub fn write_message<W: Write>(writer: &mut W, message: &Message) -> Result<()> {
    let mut bytes = encode_message(message)?;
    bytes.push(TERMINATOR);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
