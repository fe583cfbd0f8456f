//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use chat_types::Result;

// ─── Durable Store Port ──────────────────────────────────────

/// Synchronous, device-local key/value persistence.
pub trait DurableStorePort {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Reply Port ──────────────────────────────────────────────

/// Body sent to the remote reply service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub message: String,
}

/// Body returned by the remote reply service.
/// `response` is absent when the service answers with its error shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyResponse {
    #[serde(default)]
    pub response: Option<String>,
}

#[async_trait(?Send)]
pub trait ReplyPort {
    /// One outbound call carrying the user's literal text
    async fn reply(&self, message: &str) -> Result<ReplyResponse>;
}
