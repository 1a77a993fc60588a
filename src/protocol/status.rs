//! Status definitions
//!
//! One closed set shared by requests and responses. The discriminant is the
//! wire index and must never be renumbered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::KvError;

/// Message status, encoded on the wire as its integer index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Status {
    Get = 0,
    GetSuccess = 1,
    GetError = 2,
    Put = 3,
    PutSuccess = 4,
    PutUpdate = 5,
    DeleteSuccess = 6,
    DeleteError = 7,
}

impl Status {
    /// Every status, in wire order
    pub const ALL: [Status; 8] = [
        Status::Get,
        Status::GetSuccess,
        Status::GetError,
        Status::Put,
        Status::PutSuccess,
        Status::PutUpdate,
        Status::DeleteSuccess,
        Status::DeleteError,
    ];

    /// Wire index of this status
    pub fn index(self) -> u8 {
        self as u8
    }

    /// True for the statuses a client may send
    pub fn is_request(self) -> bool {
        matches!(self, Status::Get | Status::Put)
    }

    /// Protocol name, as used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Get => "GET",
            Status::GetSuccess => "GET_SUCCESS",
            Status::GetError => "GET_ERROR",
            Status::Put => "PUT",
            Status::PutSuccess => "PUT_SUCCESS",
            Status::PutUpdate => "PUT_UPDATE",
            Status::DeleteSuccess => "DELETE_SUCCESS",
            Status::DeleteError => "DELETE_ERROR",
        }
    }
}

impl TryFrom<u8> for Status {
    type Error = KvError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Status::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| KvError::MalformedMessage(format!("status {} out of range", index)))
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status.index()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
