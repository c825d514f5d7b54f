use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::library::LibraryChange;
use crate::models::{LibraryStatus, MediaItem, MediaKey, MediaKind};
use crate::sorting::SortSettings;

/// Notification emitted by the library after its content changed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryEvent {
    pub id: String,
    pub event_type: EventType,
    pub payload: EventPayload,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub source: EventSource,
    pub priority: EventPriority,
    pub metadata: HashMap<String, serde_json::Value>,
}

impl LibraryEvent {
    pub fn new(event_type: EventType, payload: EventPayload) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            payload,
            timestamp: chrono::Utc::now(),
            source: EventSource::Library,
            priority: EventPriority::Normal,
            metadata: HashMap::new(),
        }
    }

    pub fn with_priority(mut self, priority: EventPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Collection the event is about, if it concerns a single entity
    pub fn kind(&self) -> Option<MediaKind> {
        match &self.payload {
            EventPayload::Media { item } => Some(item.kind()),
            EventPayload::MediaRemoved { key } => Some(key.kind()),
            _ => None,
        }
    }

    /// Library change carried by this event, for the routing reducer
    pub fn change(&self) -> Option<LibraryChange> {
        match (&self.event_type, &self.payload) {
            (EventType::MediaUpdated, EventPayload::Media { item }) => {
                Some(LibraryChange::Updated(item.clone()))
            }
            (EventType::MediaDeleted, EventPayload::MediaRemoved { key }) => {
                Some(LibraryChange::Deleted(*key))
            }
            (EventType::LibraryReloaded, _) => Some(LibraryChange::Reloaded),
            (EventType::LibraryStatusChanged, EventPayload::Status { status }) => {
                Some(LibraryChange::StatusChanged(*status))
            }
            _ => None,
        }
    }
}

/// Event types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventType {
    // Media events
    MediaUpdated,
    MediaDeleted,

    // Library events
    LibraryReloaded,
    LibraryStatusChanged,

    // Preference events
    SortChanged,
}

/// Event payload containing specific data for each event type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    Media { item: MediaItem },
    MediaRemoved { key: MediaKey },
    Status { status: LibraryStatus },
    Sort { list: String, settings: SortSettings },
    Empty,
}

/// Event source indicating where the event originated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventSource {
    Library,
    Scene(String),
    User(String),
}

/// Event priority for processing order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub enum EventPriority {
    Low = 0,
    Normal = 1,
    High = 2,
}

impl EventType {
    /// Get a string representation for filtering/routing
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::MediaUpdated => "media.updated",
            EventType::MediaDeleted => "media.deleted",
            EventType::LibraryReloaded => "library.reloaded",
            EventType::LibraryStatusChanged => "library.status_changed",
            EventType::SortChanged => "preferences.sort_changed",
        }
    }
}
