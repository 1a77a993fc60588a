//! Frame reader
//!
//! Splits a byte stream into frames delimited by a carriage return.
//!
//! ## Buffering
//! The frame buffer grows one chunk at a time, so small messages never
//! allocate the full frame cap. Once a frame reaches the cap the configured
//! [`OversizePolicy`] decides whether it is cut short or rejected.
//!
//! ## End of stream
//! - EOF before any byte of a frame: `Ok(None)`, no more frames.
//! - EOF after at least one byte: the partial bytes are the last frame.

use std::io::{BufReader, ErrorKind, Read};

use bytes::{BufMut, Bytes, BytesMut};

use crate::config::{Config, OversizePolicy, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_FRAME_SIZE};
use crate::error::{KvError, Result};

/// Frame delimiter (carriage return)
pub const TERMINATOR: u8 = 13;

/// Reads terminator-delimited frames from a byte stream
pub struct FrameReader<R> {
    /// Buffered input, consumed one byte at a time
    inner: BufReader<R>,

    /// Bytes of the frame currently being assembled
    buf: BytesMut,

    /// Growth increment for `buf`
    chunk_size: usize,

    /// Hard cap for a single frame
    max_frame_size: usize,

    /// Behavior once the cap is reached
    policy: OversizePolicy,
}

impl<R: Read> FrameReader<R> {
    /// Create a reader with the default chunk size, cap and policy
    pub fn new(inner: R) -> Self {
        Self::with_limits(
            inner,
            DEFAULT_CHUNK_SIZE,
            DEFAULT_MAX_FRAME_SIZE,
            OversizePolicy::Truncate,
        )
    }

    /// Create a reader using the framing settings of `config`
    pub fn with_config(inner: R, config: &Config) -> Self {
        Self::with_limits(
            inner,
            config.frame_chunk_size,
            config.max_frame_size,
            config.oversize_policy,
        )
    }

    /// Create a reader with explicit limits
    pub fn with_limits(
        inner: R,
        chunk_size: usize,
        max_frame_size: usize,
        policy: OversizePolicy,
    ) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            inner: BufReader::new(inner),
            buf: BytesMut::new(),
            chunk_size,
            max_frame_size: max_frame_size.max(1),
            policy,
        }
    }

    /// Read the next frame, blocking until it is complete
    ///
    /// The terminator is consumed and not part of the returned frame.
    pub fn read_frame(&mut self) -> Result<Option<Bytes>> {
        loop {
            if self.buf.len() >= self.max_frame_size {
                return self.on_cap_reached();
            }

            match self.next_byte()? {
                None if self.buf.is_empty() => return Ok(None),
                None | Some(TERMINATOR) => return Ok(Some(self.take_frame())),
                Some(byte) => {
                    if self.buf.len() == self.buf.capacity() {
                        self.buf.reserve(self.chunk_size);
                    }
                    self.buf.put_u8(byte);
                }
            }
        }
    }

    fn on_cap_reached(&mut self) -> Result<Option<Bytes>> {
        match self.policy {
            OversizePolicy::Truncate => match self.next_byte()? {
                None | Some(TERMINATOR) => Ok(Some(self.take_frame())),
                Some(_) => {
                    // The byte past the cap is dropped; the rest stays unread.
                    tracing::warn!(
                        "Frame exceeded {} bytes, truncating",
                        self.max_frame_size
                    );
                    Ok(Some(self.take_frame()))
                }
            },
            OversizePolicy::Reject => match self.next_byte()? {
                None | Some(TERMINATOR) => Ok(Some(self.take_frame())),
                Some(_) => {
                    self.buf.clear();
                    Err(KvError::FrameTooLarge {
                        limit: self.max_frame_size,
                    })
                }
            },
        }
    }

    /// Read a single byte, `None` at end of stream
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn take_frame(&mut self) -> Bytes {
        self.buf.split().freeze()
    }

    /// Capacity currently held by the frame buffer
    pub fn buffer_capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Get a reference to the underlying reader
    pub fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }
}
