//! Draft store: per-session unsent input.
//!
//! Never persisted. Every operation returns a new collection.

use chat_types::draft::DraftCollection;

pub fn get<'a>(drafts: &'a DraftCollection, name: &str) -> &'a str {
    drafts.get(name).map(String::as_str).unwrap_or("")
}

pub fn set(drafts: &DraftCollection, name: &str, text: impl Into<String>) -> DraftCollection {
    let mut next = drafts.clone();
    next.insert(name.to_string(), text.into());
    next
}

pub fn clear(drafts: &DraftCollection, name: &str) -> DraftCollection {
    set(drafts, name, "")
}

/// Drop the entry entirely (session deleted)
pub fn remove(drafts: &DraftCollection, name: &str) -> DraftCollection {
    let mut next = drafts.clone();
    next.remove(name);
    next
}
