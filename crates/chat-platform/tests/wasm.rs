//! WASM-target tests for chat-platform (Node.js runtime).
//!
//! Tests MemoryStore and reply decoding under wasm32-unknown-unknown
//! via `wasm-pack test --node`.
//!
//! localStorage and fetch require a browser and are not covered here.

use wasm_bindgen_test::*;

use chat_core::controller::ConversationController;
use chat_core::event_bus::EventBus;
use chat_core::ports::DurableStorePort;
use chat_platform::reply::decode_reply;
use chat_platform::storage::MemoryStore;
use chat_types::config::ChatConfig;
use chat_types::session::DEFAULT_SESSION;
use std::rc::Rc;

// ─── MemoryStore Tests ───────────────────────────────────

#[wasm_bindgen_test]
fn memory_store_backend_name() {
    assert_eq!(MemoryStore::new().backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_store_set_and_get() {
    let store = MemoryStore::new();
    store.set("chatSessions", "{}").unwrap();
    assert_eq!(store.get("chatSessions").unwrap().as_deref(), Some("{}"));
}

#[wasm_bindgen_test]
fn memory_store_backs_controller() {
    let store = Rc::new(MemoryStore::new());
    let mut controller = ConversationController::new(store.clone(), &ChatConfig::default(), EventBus::new());
    assert!(controller.create_session("work"));

    let raw = store.get("chatSessions").unwrap().unwrap();
    assert!(raw.contains("\"work\""));
    assert!(raw.contains(&format!("\"{}\"", DEFAULT_SESSION)));
}

// ─── Reply decoding ──────────────────────────────────────

#[wasm_bindgen_test]
fn decode_reply_ok() {
    let r = decode_reply(200, r#"{"response":"hi"}"#).unwrap();
    assert_eq!(r.response.as_deref(), Some("hi"));
}

#[wasm_bindgen_test]
fn decode_reply_server_error() {
    assert!(decode_reply(500, "").is_err());
}
