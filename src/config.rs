//! Configuration for jsonkv
//!
//! Centralized configuration with sensible defaults.

use crate::error::{KvError, Result};

/// Default growth increment of the frame buffer
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Default hard cap on a single frame (128 chunks)
pub const DEFAULT_MAX_FRAME_SIZE: usize = 128 * DEFAULT_CHUNK_SIZE;

/// Main configuration for a jsonkv server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Max concurrent client connections
    pub max_connections: usize,

    /// Connection read timeout (milliseconds, 0 = none)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 = none)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Framing Configuration
    // -------------------------------------------------------------------------
    /// Bytes the frame buffer grows by when full
    pub frame_chunk_size: usize,

    /// Maximum bytes accumulated for one frame
    pub max_frame_size: usize,

    /// What happens when a frame reaches `max_frame_size`
    pub oversize_policy: OversizePolicy,
}

/// Handling of frames that reach the size cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OversizePolicy {
    /// Stop reading and hand back the first `max_frame_size` bytes
    #[default]
    Truncate,

    /// Fail with `FrameTooLarge`, closing the connection
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:50000".to_string(),
            max_connections: 1024,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            frame_chunk_size: DEFAULT_CHUNK_SIZE,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            oversize_policy: OversizePolicy::Truncate,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the settings can actually be served
    pub fn validate(&self) -> Result<()> {
        if self.frame_chunk_size == 0 {
            return Err(KvError::Config("frame_chunk_size must be non-zero".to_string()));
        }
        if self.max_frame_size < self.frame_chunk_size {
            return Err(KvError::Config(format!(
                "max_frame_size ({}) must be at least one chunk ({})",
                self.max_frame_size, self.frame_chunk_size
            )));
        }
        if self.max_connections == 0 {
            return Err(KvError::Config("max_connections must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum number of concurrent connections
    pub fn max_connections(mut self, count: usize) -> Self {
        self.config.max_connections = count;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the frame buffer growth increment (in bytes)
    pub fn frame_chunk_size(mut self, size: usize) -> Self {
        self.config.frame_chunk_size = size;
        self
    }

    /// Set the per-frame size cap (in bytes)
    pub fn max_frame_size(mut self, size: usize) -> Self {
        self.config.max_frame_size = size;
        self
    }

    /// Set the oversize frame policy
    pub fn oversize_policy(mut self, policy: OversizePolicy) -> Self {
        self.config.oversize_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
