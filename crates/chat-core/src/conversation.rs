//! Conversation state and its transitions.
//!
//! `ConversationState` bundles the session collection, the drafts and the
//! active session name. Each transition borrows the current state and
//! returns the next one; `None` means the operation was rejected and nothing
//! changes. Only the controller holds a mutable reference.
//!
//! A send runs through four states:
//!
//! ```text
//! IDLE ──begin_send──▶ OPTIMISTIC_APPEND ──(reply call)──▶ AWAITING_REPLY ──reconcile──▶ RECONCILED
//! ```
//!
//! `begin_send` returns a [`PendingReply`] carrying the originating session
//! name, so reconciliation lands there no matter which session is displayed
//! when the reply arrives.

use chat_types::{
    Result,
    draft::DraftCollection,
    message::{Message, FALLBACK_REPLY, PENDING_SENTINEL},
    session::{SessionCollection, SessionLog, DEFAULT_SESSION},
};
use crate::drafts;
use crate::ports::ReplyResponse;
use crate::session_store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    pub sessions: SessionCollection,
    pub drafts: DraftCollection,
    pub active: String,
}

/// Continuation data of an in-flight send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Session that was active when the message was sent
    pub target: String,
    /// Log right after the optimistic append; ends with the placeholder
    pub log: SessionLog,
    /// Literal text to hand to the reply service
    pub message: String,
}

impl ConversationState {
    /// Start on the first session of `sessions`.
    pub fn new(sessions: SessionCollection) -> Self {
        let sessions = if sessions.is_empty() {
            SessionCollection::seeded()
        } else {
            sessions
        };
        let active = sessions
            .first_name()
            .unwrap_or(DEFAULT_SESSION)
            .to_string();
        Self {
            sessions,
            drafts: DraftCollection::new(),
            active,
        }
    }

    pub fn active_log(&self) -> &[Message] {
        self.sessions
            .get(&self.active)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn active_draft(&self) -> &str {
        drafts::get(&self.drafts, &self.active)
    }

    /// True while `name`'s log ends with the placeholder
    pub fn has_pending_reply(&self, name: &str) -> bool {
        self.sessions
            .get(name)
            .and_then(|log| log.last())
            .is_some_and(Message::is_pending)
    }

    pub fn switch(&self, name: &str) -> Option<Self> {
        if !self.sessions.contains(name) {
            return None;
        }
        Some(Self {
            active: name.to_string(),
            ..self.clone()
        })
    }

    pub fn create(&self, name: &str) -> Option<Self> {
        if !session_store::is_available(&self.sessions, name) {
            return None;
        }
        Some(Self {
            sessions: session_store::create(&self.sessions, name),
            drafts: drafts::clear(&self.drafts, name),
            active: name.to_string(),
        })
    }

    pub fn delete(&self, name: &str) -> Option<Self> {
        if !self.sessions.contains(name) {
            return None;
        }
        let sessions = session_store::delete(&self.sessions, name);

        // Deleting the only session is a hard reset to a fresh "default"
        if self.sessions.len() == 1 {
            return Some(Self {
                sessions,
                drafts: drafts::clear(&DraftCollection::new(), DEFAULT_SESSION),
                active: DEFAULT_SESSION.to_string(),
            });
        }

        let active = if name == self.active {
            sessions
                .first_name()
                .unwrap_or(DEFAULT_SESSION)
                .to_string()
        } else {
            self.active.clone()
        };

        Some(Self {
            sessions,
            drafts: drafts::remove(&self.drafts, name),
            active,
        })
    }

    /// Reset the active session to the greeting and clear its draft.
    pub fn clear(&self) -> Self {
        Self {
            sessions: session_store::replace_log(
                &self.sessions,
                &self.active,
                vec![Message::greeting()],
            ),
            drafts: drafts::clear(&self.drafts, &self.active),
            active: self.active.clone(),
        }
    }

    pub fn set_draft(&self, text: impl Into<String>) -> Self {
        Self {
            drafts: drafts::set(&self.drafts, &self.active, text),
            ..self.clone()
        }
    }

    /// IDLE → OPTIMISTIC_APPEND.
    ///
    /// Rejected when `text` is blank or the active session already awaits a
    /// reply.
    pub fn begin_send(&self, text: &str) -> Option<(Self, PendingReply)> {
        if text.trim().is_empty() || self.has_pending_reply(&self.active) {
            return None;
        }

        let mut log = self.active_log().to_vec();
        log.push(Message::user(text));
        log.push(Message::pending());

        let next = Self {
            sessions: session_store::replace_log(&self.sessions, &self.active, log.clone()),
            drafts: drafts::clear(&self.drafts, &self.active),
            active: self.active.clone(),
        };
        let pending = PendingReply {
            target: self.active.clone(),
            log,
            message: text.to_string(),
        };
        Some((next, pending))
    }

    /// AWAITING_REPLY → RECONCILED.
    ///
    /// Swaps the placeholder of the captured log for exactly one bot message
    /// and stores it under `pending.target`. Rejected when the target no
    /// longer holds the captured log (deleted, recreated or cleared while
    /// the reply was in flight). Drafts and the active session are untouched.
    pub fn reconcile(&self, pending: &PendingReply, outcome: &Result<ReplyResponse>) -> Option<Self> {
        if self.sessions.get(&pending.target) != Some(&pending.log) {
            return None;
        }

        let mut log = pending.log.clone();
        log.pop();
        log.push(Message::bot(reply_text(outcome)));

        Some(Self {
            sessions: session_store::replace_log(&self.sessions, &pending.target, log),
            ..self.clone()
        })
    }
}

/// Text that replaces the placeholder for a given service outcome.
///
/// Anything other than a usable reply becomes the fallback, so the
/// placeholder never ends up as a final message.
pub fn reply_text(outcome: &Result<ReplyResponse>) -> String {
    match outcome {
        Ok(ReplyResponse { response: Some(text) }) if is_usable(text) => text.clone(),
        _ => FALLBACK_REPLY.to_string(),
    }
}

/// True when the service answered with text that can be shown as is
pub fn reply_succeeded(outcome: &Result<ReplyResponse>) -> bool {
    matches!(outcome, Ok(ReplyResponse { response: Some(text) }) if is_usable(text))
}

fn is_usable(text: &str) -> bool {
    !text.is_empty() && text != PENDING_SENTINEL
}
