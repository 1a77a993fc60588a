//! In-memory storage
//!
//! HashMap guarded by a parking_lot RwLock.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::Storage;
use crate::error::Result;

/// Volatile storage engine backed by a HashMap
#[derive(Debug, Default)]
pub struct MemStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True when no key is stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Storage for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<Option<String>> {
        Ok(self.data.write().insert(key.to_string(), value.to_string()))
    }

    fn delete(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.write().remove(key))
    }
}
