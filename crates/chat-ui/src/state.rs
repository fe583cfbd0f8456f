//! UI-level state that drives rendering.
//! Holds only presentation concerns; conversation data is read from the
//! controller each frame. Updated by draining the EventBus.

use std::collections::BTreeSet;

use chat_types::config::{ChatConfig, Theme};
use chat_types::event::ChatEvent;

/// State visible to UI panels
pub struct UiState {
    /// Sessions with a reply in flight
    pub awaiting: BTreeSet<String>,
    /// Status line text
    pub status_text: String,
    /// Whether the "new session" prompt is open
    pub show_new_session: bool,
    /// Name typed into the "new session" prompt
    pub new_session_name: String,
    /// Session whose row menu is open
    pub open_menu: Option<String>,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Background theme
    pub theme: Theme,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            awaiting: BTreeSet::new(),
            status_text: "Ready".to_string(),
            show_new_session: false,
            new_session_name: String::new(),
            open_menu: None,
            show_settings: false,
            theme,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::SessionCreated { name } => {
                    self.show_new_session = false;
                    self.new_session_name.clear();
                    self.status_text = format!("Created '{}'", name);
                }
                ChatEvent::SessionDeleted { name } => {
                    self.awaiting.remove(&name);
                    if self.open_menu.as_deref() == Some(name.as_str()) {
                        self.open_menu = None;
                    }
                    self.status_text = format!("Deleted '{}'", name);
                }
                ChatEvent::SessionSwitched { .. } => {
                    self.open_menu = None;
                }
                ChatEvent::SessionCleared { name } => {
                    self.status_text = format!("Cleared '{}'", name);
                }
                ChatEvent::SendStarted { session } => {
                    self.status_text = format!("Waiting for reply in '{}'...", session);
                    self.awaiting.insert(session);
                }
                ChatEvent::ReplyReconciled { session, success } => {
                    self.awaiting.remove(&session);
                    self.status_text = if success {
                        "Ready".to_string()
                    } else {
                        format!("Reply failed in '{}'", session)
                    };
                }
                ChatEvent::ReplyDiscarded { session } => {
                    self.awaiting.remove(&session);
                    self.status_text = "Ready".to_string();
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.awaiting.is_empty()
    }

    pub fn toggle_menu(&mut self, name: &str) {
        if self.open_menu.as_deref() == Some(name) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(name.to_string());
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Settings form buffer. Edits stay in `draft` until `commit`, so the
/// running config only changes on Save.
pub struct SettingsEditor {
    applied: ChatConfig,
    pub draft: ChatConfig,
}

impl SettingsEditor {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            draft: config.clone(),
            applied: config,
        }
    }

    /// Config the app is running with
    pub fn applied(&self) -> &ChatConfig {
        &self.applied
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.applied
    }

    /// Throw away unsaved edits
    pub fn reset(&mut self) {
        self.draft = self.applied.clone();
    }

    /// Validate the draft and make it the running config
    pub fn commit(&mut self) -> chat_types::Result<&ChatConfig> {
        self.draft.validate()?;
        self.applied = self.draft.clone();
        Ok(&self.applied)
    }
}

/// Typing indicator: ".", "..", "..." cycling every half second
pub fn typing_dots(time_secs: f64) -> &'static str {
    match ((time_secs.max(0.0) / 0.5) as u64) % 3 {
        0 => ".",
        1 => "..",
        _ => "...",
    }
}
