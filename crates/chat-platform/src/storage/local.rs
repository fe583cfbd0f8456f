//! `window.localStorage` backend.
//! Synchronous, per-origin, persistent across page reloads.

use web_sys::Storage;

use chat_core::ports::DurableStorePort;
use chat_types::{ChatError, Result};

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Grab the page's localStorage. Fails outside a window context or when
    /// the browser denies access (private mode, disabled storage).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl DurableStorePort for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localStorage"
    }
}
