//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! One [`EventBus`] lives behind an `Arc` for the whole service: the
//! client store publishes [`DomainEvent`]s, and collaborating views (the
//! SSE feed, anything else that refreshes on change) subscribe.

use carteira_core::types::ClientId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// DomainEvent
// ---------------------------------------------------------------------------

/// Something that happened in the back-office.
///
/// Built with [`DomainEvent::new`] plus the `with_*` builders for the
/// optional parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Dot-separated event name, e.g. `"client.created"`.
    pub event_type: String,

    /// Kind of the entity the event concerns (e.g. `"client"`,
    /// `"contact_message"`).
    pub source_entity_type: Option<String>,

    /// Id of that entity.
    pub source_entity_id: Option<ClientId>,

    /// Event-specific JSON extras.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent {
    /// An event carrying only its name; source starts unset and the
    /// payload empty.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            source_entity_type: None,
            source_entity_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Tag the event with the entity it concerns.
    pub fn with_source(mut self, entity_type: impl Into<String>, entity_id: ClientId) -> Self {
        self.source_entity_type = Some(entity_type.into());
        self.source_entity_id = Some(entity_id);
        self
    }

    /// Replace the payload.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Broadcast buffer size; past this, the slowest subscribers start
/// observing `RecvError::Lagged` instead of the dropped events.
const DEFAULT_CAPACITY: usize = 1024;

/// Fan-out hub: every subscriber independently receives every event
/// published after it subscribed.
///
/// ```rust
/// use carteira_events::bus::{DomainEvent, EventBus};
///
/// let bus = EventBus::default();
/// let _rx = bus.subscribe();
///
/// bus.publish(DomainEvent::new("client.created"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// A bus with an explicit channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to all current subscribers. With nobody subscribed the
    /// event is dropped.
    pub fn publish(&self, event: DomainEvent) {
        // A SendError only means there are zero receivers right now.
        let _ = self.sender.send(event);
    }

    /// A receiver over everything published from this point on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_the_published_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let id = ClientId::new_v4();
        bus.publish(
            DomainEvent::new("client.updated")
                .with_source("client", id)
                .with_payload(serde_json::json!({ "field": "paid" })),
        );

        let received = rx.recv().await.expect("event should arrive");
        assert_eq!(received.event_type, "client.updated");
        assert_eq!(received.source_entity_type.as_deref(), Some("client"));
        assert_eq!(received.source_entity_id, Some(id));
        assert_eq!(received.payload["field"], "paid");
    }

    #[tokio::test]
    async fn every_subscriber_gets_every_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(DomainEvent::new("clients.reloaded"));

        assert_eq!(rx1.recv().await.unwrap().event_type, "clients.reloaded");
        assert_eq!(rx2.recv().await.unwrap().event_type, "clients.reloaded");
    }

    #[test]
    fn publishing_to_nobody_is_a_quiet_noop() {
        let bus = EventBus::default();
        bus.publish(DomainEvent::new("contact.received"));
    }

    #[test]
    fn a_new_event_starts_bare() {
        let event = DomainEvent::new("client.deleted");
        assert_eq!(event.event_type, "client.deleted");
        assert!(event.source_entity_type.is_none());
        assert!(event.source_entity_id.is_none());
        assert!(event.payload.is_object());
    }
}
