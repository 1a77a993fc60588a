//! Message envelope
//!
//! The unit exchanged in both directions: a key, a value and a status.

use serde::{Deserialize, Serialize};

use super::Status;

/// A single protocol message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Storage key
    pub key: String,

    /// Storage value; empty on a PUT means delete
    pub value: String,

    /// Request or response kind
    pub status: Status,
}

impl Message {
    /// Create a message from its three fields
    pub fn new(key: impl Into<String>, value: impl Into<String>, status: Status) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            status,
        }
    }

    /// Create a GET request
    pub fn get(key: impl Into<String>) -> Self {
        Self::new(key, "", Status::Get)
    }

    /// Create a PUT request
    pub fn put(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, value, Status::Put)
    }

    /// Create a delete request (a PUT carrying an empty value)
    pub fn delete(key: impl Into<String>) -> Self {
        Self::new(key, "", Status::Put)
    }
}
