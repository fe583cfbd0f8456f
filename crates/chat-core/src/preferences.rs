//! Client preferences kept next to the sessions: the configuration itself and
//! the background theme.

use chat_types::{
    Result,
    config::{ChatConfig, Theme, CONFIG_STORAGE_KEY},
};
use crate::ports::DurableStorePort;

/// Stored theme, or the default one when absent or unknown
pub fn load_theme(store: &dyn DurableStorePort, key: &str) -> Theme {
    match store.get(key) {
        Ok(Some(label)) => Theme::from_label(&label).unwrap_or_else(|| {
            log::warn!("Unknown theme '{}', using default", label);
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            log::warn!("Reading theme failed: {}", e);
            Theme::default()
        }
    }
}

pub fn save_theme(store: &dyn DurableStorePort, key: &str, theme: Theme) -> Result<()> {
    store.set(key, theme.label())
}

/// Stored configuration, or defaults when absent, corrupt or invalid
pub fn load_config(store: &dyn DurableStorePort) -> ChatConfig {
    match store.get(CONFIG_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<ChatConfig>(&raw) {
            Ok(config) => match config.validate() {
                Ok(()) => {
                    log::info!("Config restored from {}", store.backend_name());
                    config
                }
                Err(e) => {
                    log::warn!("Saved config rejected ({}), using defaults", e);
                    ChatConfig::default()
                }
            },
            Err(e) => {
                log::warn!("Saved config is corrupt ({}), using defaults", e);
                ChatConfig::default()
            }
        },
        Ok(None) => ChatConfig::default(),
        Err(e) => {
            log::warn!("Reading config failed: {}", e);
            ChatConfig::default()
        }
    }
}

/// Write `config` after validating it. Invalid settings are not stored.
pub fn save_config(store: &dyn DurableStorePort, config: &ChatConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string(config)?;
    store.set(CONFIG_STORAGE_KEY, &json)
}
