//! Event: an immutable audit record of a successful mutation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key::{EntityKind, Keyed};

/// UTC timestamp attached to events.
pub type Timestamp = DateTime<Utc>;

/// Unique identifier for an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(uuid::Uuid);

impl Default for EventId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl EventId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        })
    }
}

/// Record of one create, update, or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    pub kind: EntityKind,
    pub key: String,
    /// JSON form of the entity after the change (before it, for deletes).
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Record a change to `entity`, stamped with the current time.
    #[must_use]
    pub fn for_entity<V: Keyed + Serialize>(event_type: EventType, entity: &V) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            kind: V::KIND,
            key: entity.key().to_string(),
            data: serde_json::to_value(entity).unwrap_or_default(),
            timestamp: Utc::now(),
        }
    }
}
