//! Session store: rules for the persisted session collection.
//!
//! Every mutation is a pure function from an old collection to a new one.
//! The caller decides when to `persist`.

use chat_types::{
    Result,
    message::Message,
    session::{SessionCollection, SessionLog},
};
use crate::ports::DurableStorePort;

/// Read the collection stored under `key`.
///
/// Absence, a store read error, an unparsable payload and an empty object all
/// yield the seeded `{ "default": [greeting] }` collection.
pub fn load(store: &dyn DurableStorePort, key: &str) -> SessionCollection {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("No saved sessions under '{}', starting fresh", key);
            return SessionCollection::seeded();
        }
        Err(e) => {
            log::warn!("Reading '{}' from {} failed: {}", key, store.backend_name(), e);
            return SessionCollection::seeded();
        }
    };

    match serde_json::from_str::<SessionCollection>(&raw) {
        Ok(collection) if !collection.is_empty() => {
            log::info!("Loaded {} session(s) from {}", collection.len(), store.backend_name());
            collection
        }
        Ok(_) => {
            log::warn!("Saved session collection is empty, starting fresh");
            SessionCollection::seeded()
        }
        Err(e) => {
            log::warn!("Saved sessions are corrupt ({}), starting fresh", e);
            SessionCollection::seeded()
        }
    }
}

/// A name is acceptable when it is non-blank and not already taken
pub fn is_available(collection: &SessionCollection, name: &str) -> bool {
    !name.trim().is_empty() && !collection.contains(name)
}

/// Add `name → [greeting]`. Returns the input unchanged when the name is
/// empty or already taken.
pub fn create(collection: &SessionCollection, name: &str) -> SessionCollection {
    let mut next = collection.clone();
    if is_available(collection, name) {
        next.insert(name, vec![Message::greeting()]);
    }
    next
}

/// Remove `name`. Removing the last session is a hard reset to the seeded
/// collection.
pub fn delete(collection: &SessionCollection, name: &str) -> SessionCollection {
    let mut next = collection.clone();
    next.remove(name);
    if next.is_empty() {
        return SessionCollection::seeded();
    }
    next
}

/// Replace the log of an existing session.
pub fn replace_log(collection: &SessionCollection, name: &str, log: SessionLog) -> SessionCollection {
    debug_assert!(collection.contains(name), "replace_log on unknown session '{}'", name);
    let mut next = collection.clone();
    next.insert(name, log);
    next
}

/// Write the whole collection under `key`.
pub fn persist(store: &dyn DurableStorePort, key: &str, collection: &SessionCollection) -> Result<()> {
    let json = serde_json::to_string(collection)?;
    store.set(key, &json)
}

/// Replace every trailing pending placeholder with the fallback reply.
///
/// A placeholder can only be left behind when the process stopped between
/// the optimistic append and reconciliation. Returns the repaired collection
/// and the number of sessions touched.
pub fn recover_interrupted(collection: &SessionCollection) -> (SessionCollection, usize) {
    let mut next = collection.clone();
    let mut repaired = 0;
    for (name, log) in next.iter_mut() {
        if log.last().is_some_and(Message::is_pending) {
            log.pop();
            log.push(Message::fallback());
            repaired += 1;
            log::warn!("Session '{}' had an unfinished reply, marked as failed", name);
        }
    }
    (next, repaired)
}
