//! Error types for jsonkv
//!
//! Provides a unified error type for all operations. Every variant is
//! connection-scoped: the server never exits because one peer misbehaved.

use std::io::ErrorKind;

use thiserror::Error;

use crate::protocol::Status;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for jsonkv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection closed by peer")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Unsupported request status: {0}")]
    UnsupportedRequest(Status),

    #[error("Frame exceeds maximum size of {limit} bytes")]
    FrameTooLarge { limit: usize },

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KvError {
    /// True when the error only means the peer went away.
    ///
    /// Handlers log these at debug level and report a clean close.
    pub fn is_disconnect(&self) -> bool {
        match self {
            KvError::ConnectionClosed => true,
            KvError::Io(e) => matches!(
                e.kind(),
                ErrorKind::UnexpectedEof
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for KvError {
    fn from(e: serde_json::Error) -> Self {
        KvError::MalformedMessage(e.to_string())
    }
}
