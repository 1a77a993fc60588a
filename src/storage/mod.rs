//! Storage Module
//!
//! The key-value collaborator the dispatcher talks to.
//!
//! ## Contract
//! - All operations are synchronous and work on plain strings
//! - `put` and `delete` report the value they replaced or removed
//! - Each call is individually atomic in [`MemStore`]; nothing spans calls,
//!   so a read-modify-write across connections is not atomic
//! - Implementations must be `Send + Sync`: one instance is shared by every
//!   connection handler

mod memory;

pub use memory::MemStore;

use crate::error::Result;

/// Synchronous string key-value storage
pub trait Storage: Send + Sync {
    /// Look up `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, returning the previous value if any
    fn put(&self, key: &str, value: &str) -> Result<Option<String>>;

    /// Remove `key`, returning the removed value if any
    fn delete(&self, key: &str) -> Result<Option<String>>;
}
