use std::collections::HashMap;

/// Session name → unsent input text. In-memory only.
pub type DraftCollection = HashMap<String, String>;
