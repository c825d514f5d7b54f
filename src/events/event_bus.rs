use super::types::{EventPayload, EventPriority, EventType, LibraryEvent};
use crate::models::{LibraryStatus, MediaItem, MediaKey, MediaKind};
use crate::sorting::SortSettings;
use crate::utils::AppResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::{RwLock, broadcast};
use tracing::trace;

/// Event subscriber handle
pub struct EventSubscriber {
    receiver: broadcast::Receiver<LibraryEvent>,
    filter: Option<EventFilter>,
    missed: u64,
}

impl EventSubscriber {
    /// Create a new subscriber with an optional filter
    pub fn new(receiver: broadcast::Receiver<LibraryEvent>, filter: Option<EventFilter>) -> Self {
        Self {
            receiver,
            filter,
            missed: 0,
        }
    }

    /// Receive the next event matching the filter.
    ///
    /// `RecvError::Lagged` means events were dropped and the caller should
    /// resynchronise from the library itself.
    pub async fn recv(&mut self) -> Result<LibraryEvent, RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            if self.accepts(&event) {
                return Ok(event);
            }
        }
    }

    /// Try to receive without blocking. Events dropped because the
    /// subscriber fell behind are counted, see [`Self::take_missed`].
    pub fn try_recv(&mut self) -> Option<LibraryEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.accepts(&event) => return Some(event),
                Ok(_) => continue,
                Err(TryRecvError::Lagged(count)) => self.missed += count,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Number of events lost to lag since the last call
    pub fn take_missed(&mut self) -> u64 {
        std::mem::take(&mut self.missed)
    }

    fn accepts(&self, event: &LibraryEvent) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter.matches(event))
    }
}

/// Event filter for selective subscription
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    event_types: Option<Vec<EventType>>,
    kinds: Option<Vec<MediaKind>>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(mut self, types: Vec<EventType>) -> Self {
        self.event_types = Some(types);
        self
    }

    /// Only pass entity events for these collections. Events that are not
    /// about a single entity (reloads, status) always pass.
    pub fn with_kinds(mut self, kinds: Vec<MediaKind>) -> Self {
        self.kinds = Some(kinds);
        self
    }

    pub fn matches(&self, event: &LibraryEvent) -> bool {
        if let Some(ref types) = self.event_types
            && !types.contains(&event.event_type)
        {
            return false;
        }

        if let Some(ref kinds) = self.kinds
            && let Some(kind) = event.kind()
            && !kinds.contains(&kind)
        {
            return false;
        }

        true
    }
}

/// Broadcast channel carrying library change notifications to every scene
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<LibraryEvent>,
    stats: Arc<RwLock<EventBusStats>>,
    event_history: Arc<RwLock<Vec<LibraryEvent>>>,
    max_history_size: usize,
}

#[derive(Debug, Default)]
pub struct EventBusStats {
    pub total_events: u64,
    pub events_by_type: HashMap<String, u64>,
    pub subscriber_count: usize,
    pub dropped_events: u64,
}

impl EventBus {
    /// Create a new event bus with specified buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));

        Self {
            sender,
            stats: Arc::new(RwLock::new(EventBusStats::default())),
            event_history: Arc::new(RwLock::new(Vec::new())),
            max_history_size: 100,
        }
    }

    /// Publish an event to all subscribers
    pub async fn publish(&self, event: LibraryEvent) -> AppResult<()> {
        trace!(
            "Publishing event: {:?} with priority {:?}",
            event.event_type, event.priority
        );

        {
            let mut stats = self.stats.write().await;
            stats.total_events += 1;
            *stats
                .events_by_type
                .entry(event.event_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        {
            let mut history = self.event_history.write().await;
            history.push(event.clone());
            if history.len() > self.max_history_size {
                let excess = history.len() - self.max_history_size;
                history.drain(0..excess);
            }
        }

        if self.sender.send(event).is_err() {
            // No subscribers is normal, don't log
            self.stats.write().await.dropped_events += 1;
        }
        Ok(())
    }

    /// Subscribe to all events
    pub fn subscribe(&self) -> EventSubscriber {
        EventSubscriber::new(self.sender.subscribe(), None)
    }

    /// Subscribe with a filter
    pub fn subscribe_filtered(&self, filter: EventFilter) -> EventSubscriber {
        EventSubscriber::new(self.sender.subscribe(), Some(filter))
    }

    /// Subscribe to specific event types
    pub fn subscribe_to_types(&self, types: Vec<EventType>) -> EventSubscriber {
        self.subscribe_filtered(EventFilter::new().with_types(types))
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub async fn get_stats(&self) -> EventBusStats {
        let stats = self.stats.read().await;
        EventBusStats {
            total_events: stats.total_events,
            events_by_type: stats.events_by_type.clone(),
            subscriber_count: self.subscriber_count(),
            dropped_events: stats.dropped_events,
        }
    }

    /// Get event history for debugging
    pub async fn get_history(&self) -> Vec<LibraryEvent> {
        self.event_history.read().await.clone()
    }

    pub async fn emit_media_updated(&self, item: MediaItem) -> AppResult<()> {
        self.publish(LibraryEvent::new(
            EventType::MediaUpdated,
            EventPayload::Media { item },
        ))
        .await
    }

    pub async fn emit_media_deleted(&self, key: MediaKey) -> AppResult<()> {
        self.publish(LibraryEvent::new(
            EventType::MediaDeleted,
            EventPayload::MediaRemoved { key },
        ))
        .await
    }

    pub async fn emit_library_reloaded(&self) -> AppResult<()> {
        self.publish(
            LibraryEvent::new(EventType::LibraryReloaded, EventPayload::Empty)
                .with_priority(EventPriority::High),
        )
        .await
    }

    pub async fn emit_status_changed(&self, status: LibraryStatus) -> AppResult<()> {
        self.publish(LibraryEvent::new(
            EventType::LibraryStatusChanged,
            EventPayload::Status { status },
        ))
        .await
    }

    pub async fn emit_sort_changed(&self, list: String, settings: SortSettings) -> AppResult<()> {
        self.publish(
            LibraryEvent::new(EventType::SortChanged, EventPayload::Sort { list, settings })
                .with_priority(EventPriority::Low),
        )
        .await
    }
}
