use serde::{Deserialize, Serialize};

use crate::{ChatError, Result};

/// Durable key holding the client configuration itself
pub const CONFIG_STORAGE_KEY: &str = "chatConfig";

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Remote reply service endpoint (POST `{ "message": ... }`)
    pub reply_endpoint: String,
    /// Anything slower counts as a transport failure
    pub request_timeout_ms: u64,
    /// Durable key of the serialized session collection
    pub sessions_key: String,
    /// Durable key of the theme preference
    pub theme_key: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_endpoint: "http://127.0.0.1:8000/chat".to_string(),
            request_timeout_ms: 60_000,
            sessions_key: "chatSessions".to_string(),
            theme_key: "bgTheme".to_string(),
        }
    }
}

impl ChatConfig {
    /// Reject settings the client cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.reply_endpoint.trim().is_empty() {
            return Err(ChatError::Config("reply endpoint is empty".to_string()));
        }
        if self.request_timeout_ms == 0 {
            return Err(ChatError::Config("request timeout must be positive".to_string()));
        }
        if self.sessions_key.is_empty() || self.theme_key.is_empty() {
            return Err(ChatError::Config("storage keys must not be empty".to_string()));
        }
        if self.sessions_key == self.theme_key {
            return Err(ChatError::Config(format!(
                "sessions and theme share the storage key '{}'",
                self.sessions_key
            )));
        }
        Ok(())
    }
}

/// Background theme preference. Stored by display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "Purple-Pink")]
    PurplePink,
    #[serde(rename = "Blue-Teal")]
    BlueTeal,
    #[serde(rename = "Sunset")]
    Sunset,
    #[serde(rename = "Green-Mint")]
    GreenMint,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[
            Theme::PurplePink,
            Theme::BlueTeal,
            Theme::Sunset,
            Theme::GreenMint,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::PurplePink => "Purple-Pink",
            Theme::BlueTeal => "Blue-Teal",
            Theme::Sunset => "Sunset",
            Theme::GreenMint => "Green-Mint",
        }
    }

    pub fn from_label(label: &str) -> Option<Theme> {
        Self::all().iter().copied().find(|t| t.label() == label)
    }
}
