//! Conversation controller: the single writer of conversation state.
//!
//! Wraps a [`ConversationState`] and applies transitions to it, writing the
//! session collection through the durable store after every change the
//! caller keeps. Rejected operations are silent no-ops reported as `false`
//! or `None`.
//!
//! The send protocol is split in two synchronous halves so the shell can
//! release its borrow while the reply is in flight; see [`send`].

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::{
    Result,
    config::ChatConfig,
    event::ChatEvent,
    message::Message,
    session::SessionCollection,
};
use crate::conversation::{self, ConversationState, PendingReply};
use crate::event_bus::EventBus;
use crate::ports::{DurableStorePort, ReplyPort, ReplyResponse};
use crate::session_store;

pub struct ConversationController {
    state: ConversationState,
    store: Rc<dyn DurableStorePort>,
    sessions_key: String,
    event_bus: EventBus,
}

impl ConversationController {
    /// Load the persisted collection (or the seeded default) and start on
    /// its first session. Replies left unfinished by a previous run are
    /// turned into failures and written back straight away.
    pub fn new(store: Rc<dyn DurableStorePort>, config: &ChatConfig, event_bus: EventBus) -> Self {
        let loaded = session_store::load(store.as_ref(), &config.sessions_key);
        let (sessions, repaired) = session_store::recover_interrupted(&loaded);

        let controller = Self {
            state: ConversationState::new(sessions),
            store,
            sessions_key: config.sessions_key.clone(),
            event_bus,
        };
        if repaired > 0 {
            controller.persist();
        }
        controller
    }

    // ─── Read accessors ──────────────────────────────────────

    pub fn sessions(&self) -> &SessionCollection {
        &self.state.sessions
    }

    pub fn active_session(&self) -> &str {
        &self.state.active
    }

    pub fn active_log(&self) -> &[Message] {
        self.state.active_log()
    }

    pub fn active_draft(&self) -> &str {
        self.state.active_draft()
    }

    pub fn session_names(&self) -> Vec<String> {
        self.state.sessions.names().map(str::to_string).collect()
    }

    pub fn has_pending_reply(&self, name: &str) -> bool {
        self.state.has_pending_reply(name)
    }

    // ─── Lifecycle ───────────────────────────────────────────

    pub fn switch_session(&mut self, name: &str) -> bool {
        match self.state.switch(name) {
            Some(next) => {
                self.state = next;
                self.event_bus.emit(ChatEvent::SessionSwitched { name: name.to_string() });
                true
            }
            None => {
                log::debug!("Switch to unknown session '{}' ignored", name);
                false
            }
        }
    }

    pub fn create_session(&mut self, name: &str) -> bool {
        match self.state.create(name) {
            Some(next) => {
                self.commit(next);
                log::info!("Session '{}' created", name);
                self.event_bus.emit(ChatEvent::SessionCreated { name: name.to_string() });
                true
            }
            None => {
                log::debug!("Session name '{}' rejected", name);
                false
            }
        }
    }

    pub fn delete_session(&mut self, name: &str) -> bool {
        let was_active = self.state.active == name;
        match self.state.delete(name) {
            Some(next) => {
                self.commit(next);
                log::info!("Session '{}' deleted", name);
                self.event_bus.emit(ChatEvent::SessionDeleted { name: name.to_string() });
                if was_active {
                    self.event_bus.emit(ChatEvent::SessionSwitched {
                        name: self.state.active.clone(),
                    });
                }
                true
            }
            None => {
                log::debug!("Delete of unknown session '{}' ignored", name);
                false
            }
        }
    }

    /// Reset the active session to the greeting
    pub fn clear_session(&mut self) {
        let next = self.state.clear();
        self.commit(next);
        log::info!("Session '{}' cleared", self.state.active);
        self.event_bus.emit(ChatEvent::SessionCleared {
            name: self.state.active.clone(),
        });
    }

    /// Store the input box text for the active session. Not persisted.
    pub fn set_draft(&mut self, text: &str) {
        self.state = self.state.set_draft(text);
    }

    // ─── Send protocol ───────────────────────────────────────

    /// Optimistic append of the user message and the placeholder, persisted
    /// before returning. `None` when the text is blank or the active session
    /// already awaits a reply.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingReply> {
        let Some((next, pending)) = self.state.begin_send(text) else {
            log::debug!("Send in '{}' rejected", self.state.active);
            return None;
        };
        self.commit(next);
        self.event_bus.emit(ChatEvent::SendStarted {
            session: pending.target.clone(),
        });
        Some(pending)
    }

    /// Reconcile the reply into the session it was sent from.
    /// Returns `false` when that session is gone or was reset meanwhile.
    pub fn finish_send(&mut self, pending: &PendingReply, outcome: &Result<ReplyResponse>) -> bool {
        if let Err(e) = outcome {
            log::warn!("Reply for '{}' failed: {}", pending.target, e);
        }
        match self.state.reconcile(pending, outcome) {
            Some(next) => {
                self.commit(next);
                self.event_bus.emit(ChatEvent::ReplyReconciled {
                    session: pending.target.clone(),
                    success: conversation::reply_succeeded(outcome),
                });
                true
            }
            None => {
                log::info!("Reply for '{}' discarded, session changed while waiting", pending.target);
                self.event_bus.emit(ChatEvent::ReplyDiscarded {
                    session: pending.target.clone(),
                });
                false
            }
        }
    }

    fn commit(&mut self, next: ConversationState) {
        let changed = next.sessions != self.state.sessions;
        self.state = next;
        if changed {
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(e) = session_store::persist(self.store.as_ref(), &self.sessions_key, &self.state.sessions) {
            log::error!("Failed to persist sessions to {}: {}", self.store.backend_name(), e);
        }
    }
}

/// Full send cycle against a shared controller.
///
/// The controller is borrowed only for the two synchronous halves, so other
/// operations (switching, creating, sending elsewhere) may run while the
/// reply is awaited. Returns `false` if the send was rejected up front or
/// its reply was discarded.
pub async fn send(
    controller: &Rc<RefCell<ConversationController>>,
    reply: &dyn ReplyPort,
    text: &str,
) -> bool {
    let pending = match controller.borrow_mut().begin_send(text) {
        Some(p) => p,
        None => return false,
    };

    let outcome = reply.reply(&pending.message).await;

    controller.borrow_mut().finish_send(&pending, &outcome)
}
