//! Tests for the Dispatcher
//!
//! These tests verify:
//! - GET hit / miss responses
//! - PUT insert vs update
//! - PUT with empty value as delete
//! - Rejection of response-kind requests

use std::sync::Arc;

use jsonkv::protocol::{Message, Status};
use jsonkv::{Dispatcher, KvError, MemStore, Storage};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (Arc<MemStore>, Dispatcher) {
    let store = Arc::new(MemStore::new());
    let dispatcher = Dispatcher::new(store.clone());
    (store, dispatcher)
}

fn sample_pairs() -> Vec<(String, String)> {
    (0..50)
        .map(|i| (format!("key-{}", i), format!("value-{}-{}", i, "x".repeat(i % 7))))
        .collect()
}

// =============================================================================
// PUT Tests
// =============================================================================

#[test]
fn test_put_fresh_then_update() {
    let (_store, dispatcher) = setup();

    for (key, value) in sample_pairs() {
        let first = dispatcher.dispatch(&Message::put(&key, &value)).unwrap();
        assert_eq!(first, Message::new(&key, &value, Status::PutSuccess));

        let second_value = format!("{}-v2", value);
        let second = dispatcher.dispatch(&Message::put(&key, &second_value)).unwrap();
        assert_eq!(second, Message::new(&key, &second_value, Status::PutUpdate));
    }
}

#[test]
fn test_put_writes_through_to_storage() {
    let (store, dispatcher) = setup();

    dispatcher.dispatch(&Message::put("a", "1")).unwrap();
    dispatcher.dispatch(&Message::put("a", "2")).unwrap();

    assert_eq!(store.get("a").unwrap(), Some("2".to_string()));
    assert_eq!(store.len(), 1);
}

// =============================================================================
// GET Tests
// =============================================================================

#[test]
fn test_get_never_written() {
    let (_store, dispatcher) = setup();

    for (key, _) in sample_pairs() {
        let response = dispatcher.dispatch(&Message::get(&key)).unwrap();
        assert_eq!(response, Message::new(&key, "", Status::GetError));
    }
}

#[test]
fn test_get_after_put() {
    let (_store, dispatcher) = setup();

    for (key, value) in sample_pairs() {
        dispatcher.dispatch(&Message::put(&key, &value)).unwrap();
    }
    for (key, value) in sample_pairs() {
        let response = dispatcher.dispatch(&Message::get(&key)).unwrap();
        assert_eq!(response, Message::new(&key, &value, Status::GetSuccess));
    }
}

#[test]
fn test_get_returns_latest_value() {
    let (_store, dispatcher) = setup();

    dispatcher.dispatch(&Message::put("k", "old")).unwrap();
    dispatcher.dispatch(&Message::put("k", "new")).unwrap();

    let response = dispatcher.dispatch(&Message::get("k")).unwrap();
    assert_eq!(response.value, "new");
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_existing_returns_last_value() {
    let (store, dispatcher) = setup();

    dispatcher.dispatch(&Message::put("a", "1")).unwrap();
    dispatcher.dispatch(&Message::put("a", "last")).unwrap();

    let response = dispatcher.dispatch(&Message::delete("a")).unwrap();
    assert_eq!(response, Message::new("a", "last", Status::DeleteSuccess));
    assert!(store.is_empty());
}

#[test]
fn test_delete_missing() {
    let (_store, dispatcher) = setup();

    let response = dispatcher.dispatch(&Message::delete("ghost")).unwrap();
    assert_eq!(response, Message::new("ghost", "", Status::DeleteError));
}

#[test]
fn test_delete_then_get_and_reinsert() {
    let (_store, dispatcher) = setup();

    dispatcher.dispatch(&Message::put("a", "1")).unwrap();
    dispatcher.dispatch(&Message::delete("a")).unwrap();

    let get = dispatcher.dispatch(&Message::get("a")).unwrap();
    assert_eq!(get.status, Status::GetError);

    let put = dispatcher.dispatch(&Message::put("a", "again")).unwrap();
    assert_eq!(put.status, Status::PutSuccess);
}

#[test]
fn test_double_delete() {
    let (_store, dispatcher) = setup();

    dispatcher.dispatch(&Message::put("a", "1")).unwrap();
    let first = dispatcher.dispatch(&Message::delete("a")).unwrap();
    let second = dispatcher.dispatch(&Message::delete("a")).unwrap();

    assert_eq!(first.status, Status::DeleteSuccess);
    assert_eq!(second.status, Status::DeleteError);
}

// =============================================================================
// Protocol Violation Tests
// =============================================================================

#[test]
fn test_response_kind_request_is_unsupported() {
    let (store, dispatcher) = setup();

    let result = dispatcher.dispatch(&Message::new("a", "1", Status::PutSuccess));
    assert!(matches!(
        result,
        Err(KvError::UnsupportedRequest(Status::PutSuccess))
    ));
    assert!(store.is_empty());
}

#[test]
fn test_responses_are_never_request_kinds() {
    let (_store, dispatcher) = setup();
    let requests = [
        Message::get("k"),
        Message::put("k", "v"),
        Message::put("k", "w"),
        Message::get("k"),
        Message::delete("k"),
        Message::delete("k"),
    ];

    for request in &requests {
        let response = dispatcher.dispatch(request).unwrap();
        assert!(!response.status.is_request());
        assert_eq!(response.key, request.key);
    }
}
