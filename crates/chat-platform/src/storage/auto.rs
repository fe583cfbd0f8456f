//! Pick the best available store.
//!
//! Priority: localStorage → Memory (fallback)

use std::rc::Rc;
use chat_core::ports::DurableStorePort;
use super::{LocalStorageStore, MemoryStore};

/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_store() -> Rc<dyn DurableStorePort> {
    match LocalStorageStore::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}
