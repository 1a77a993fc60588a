//! Dispatch Module
//!
//! Turns one request message into one response message.
//!
//! ## Decision Table
//! | request          | storage call    | key present     | key absent     |
//! |------------------|-----------------|-----------------|----------------|
//! | GET              | `get(key)`      | GET_SUCCESS     | GET_ERROR      |
//! | PUT, empty value | `delete(key)`   | DELETE_SUCCESS  | DELETE_ERROR   |
//! | PUT, value       | `put(key, v)`   | PUT_UPDATE      | PUT_SUCCESS    |
//!
//! Response values: GET_SUCCESS carries the stored value, GET_ERROR an empty
//! string, DELETE_SUCCESS the removed value, DELETE_ERROR the request value,
//! and both PUT outcomes the new value.

use std::sync::Arc;

use crate::error::{KvError, Result};
use crate::protocol::{Message, Status};
use crate::storage::Storage;

/// Routes requests to the storage collaborator
#[derive(Clone)]
pub struct Dispatcher {
    storage: Arc<dyn Storage>,
}

impl Dispatcher {
    /// Create a dispatcher over the given storage
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Produce the response for `request`
    ///
    /// Fails with `UnsupportedRequest` for response-kind statuses and
    /// propagates storage failures unchanged.
    pub fn dispatch(&self, request: &Message) -> Result<Message> {
        match request.status {
            Status::Get => self.get(&request.key),
            Status::Put if request.value.is_empty() => self.delete(&request.key, &request.value),
            Status::Put => self.put(&request.key, &request.value),
            other => Err(KvError::UnsupportedRequest(other)),
        }
    }

    fn get(&self, key: &str) -> Result<Message> {
        match self.storage.get(key)? {
            Some(value) => {
                tracing::info!(key = %key, "GET_SUCCESS");
                Ok(Message::new(key, value, Status::GetSuccess))
            }
            None => {
                tracing::info!(key = %key, "GET_ERROR: key not found");
                Ok(Message::new(key, "", Status::GetError))
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<Message> {
        match self.storage.put(key, value)? {
            Some(_) => {
                tracing::info!(key = %key, "PUT_UPDATE");
                Ok(Message::new(key, value, Status::PutUpdate))
            }
            None => {
                tracing::info!(key = %key, "PUT_SUCCESS: inserted new key");
                Ok(Message::new(key, value, Status::PutSuccess))
            }
        }
    }

    fn delete(&self, key: &str, value: &str) -> Result<Message> {
        match self.storage.delete(key)? {
            Some(removed) => {
                tracing::info!(key = %key, "DELETE_SUCCESS");
                Ok(Message::new(key, removed, Status::DeleteSuccess))
            }
            None => {
                tracing::info!(key = %key, "DELETE_ERROR: key not found");
                Ok(Message::new(key, value, Status::DeleteError))
            }
        }
    }
}
