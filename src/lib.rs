//! # jsonkv
//!
//! A single-node key-value store served over TCP with:
//! - Carriage-return delimited framing with bounded buffering
//! - JSON message envelopes (`key`, `value`, `status`)
//! - GET / PUT / DELETE dispatch onto an injected storage collaborator
//! - One blocking handler thread per accepted connection
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │              (one thread per connection)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ bytes
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │           FrameReader  →  Message codec (JSON)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Message
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Dispatcher                               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ get / put / delete
//!                       ▼
//!               ┌──────────────┐
//!               │   Storage    │
//!               │  (MemStore)  │
//!               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod storage;
pub mod dispatch;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::{Config, OversizePolicy};
pub use dispatch::Dispatcher;
pub use storage::{MemStore, Storage};
pub use client::KvClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of jsonkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
