use serde::{Deserialize, Serialize};

/// Events emitted by the conversation controller.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A session was added and made active
    SessionCreated { name: String },

    /// A session was removed
    SessionDeleted { name: String },

    /// The displayed session changed
    SessionSwitched { name: String },

    /// The active session was reset to the greeting
    SessionCleared { name: String },

    /// Optimistic append done, reply requested
    SendStarted { session: String },

    /// The pending placeholder was replaced
    ReplyReconciled { session: String, success: bool },

    /// A reply arrived for a session that no longer exists
    ReplyDiscarded { session: String },
}
