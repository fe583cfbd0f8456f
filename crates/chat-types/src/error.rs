use thiserror::Error;

/// Failures raised by the client's adapters and config checks.
///
/// None of these reach the conversation log directly: a failed reply is
/// shown as the fallback text and a failed write is only logged.
#[derive(Error, Debug, Clone)]
pub enum ChatError {
    /// Durable store read or write rejected
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Response arrived but is not a usable reply (non-2xx, wrong shape)
    #[error("Reply service error: {0}")]
    Reply(String),

    #[error("Reply timed out after {0}ms")]
    Timeout(u64),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
