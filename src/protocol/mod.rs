//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Message Format
//! A UTF-8 JSON object followed by a single carriage return (0x0D):
//! ```text
//! {"key":"a","value":"1","status":3}\r
//! ```
//!
//! ### Status Codes
//! - 0: GET            (request)
//! - 1: GET_SUCCESS
//! - 2: GET_ERROR
//! - 3: PUT            (request; empty value deletes)
//! - 4: PUT_SUCCESS
//! - 5: PUT_UPDATE
//! - 6: DELETE_SUCCESS
//! - 7: DELETE_ERROR

mod status;
mod message;
mod codec;
pub mod frame;

pub use status::Status;
pub use message::Message;
pub use codec::{encode_message, decode_message, read_message, write_message};
pub use frame::{FrameReader, TERMINATOR};
