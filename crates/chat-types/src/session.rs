//! Session collection: the unit of persistence.
//!
//! Serialized as a JSON object `{ "<name>": [<message>, ...], ... }`.
//! Key order is insertion order and survives a round trip, so "first
//! remaining session" is stable across reloads.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::message::Message;

/// Name of the session that always exists after a reset
pub const DEFAULT_SESSION: &str = "default";

/// Ordered message history of one session
pub type SessionLog = Vec<Message>;

/// Mapping of session name → log, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCollection {
    entries: Vec<(String, SessionLog)>,
}

impl SessionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{ "default": [greeting] }`
    pub fn seeded() -> Self {
        let mut collection = Self::new();
        collection.insert(DEFAULT_SESSION, vec![Message::greeting()]);
        collection
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&SessionLog> {
        self.position(name).map(|i| &self.entries[i].1)
    }

    /// Insert or overwrite. An existing key keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, log: SessionLog) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = log,
            None => self.entries.push((name, log)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<SessionLog> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn first_name(&self) -> Option<&str> {
        self.entries.first().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SessionLog)> {
        self.entries.iter().map(|(name, log)| (name.as_str(), log))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut SessionLog)> {
        self.entries
            .iter_mut()
            .map(|(name, log)| (name.as_str(), log))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

impl Serialize for SessionCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, log) in &self.entries {
            map.serialize_entry(name, log)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SessionCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = SessionCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of session name to message list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut collection = SessionCollection::new();
                while let Some((name, log)) = access.next_entry::<String, SessionLog>()? {
                    collection.insert(name, log);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
