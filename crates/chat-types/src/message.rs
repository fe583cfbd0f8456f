use serde::{Deserialize, Serialize};

/// Seed message every new or cleared session starts with
pub const GREETING: &str = "Hello! How can I help you today?";

/// Substituted for the reply whenever the remote call fails or comes back empty
pub const FALLBACK_REPLY: &str = "Oops! Something went wrong.";

/// Placeholder bot text while a reply is in flight. Never a final state.
pub const PENDING_SENTINEL: &str = "__typing__";

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single entry in a session log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn greeting() -> Self {
        Self::bot(GREETING)
    }

    pub fn pending() -> Self {
        Self::bot(PENDING_SENTINEL)
    }

    pub fn fallback() -> Self {
        Self::bot(FALLBACK_REPLY)
    }

    /// True for the in-flight placeholder
    pub fn is_pending(&self) -> bool {
        self.sender == Sender::Bot && self.text == PENDING_SENTINEL
    }
}
