//! Live domain-event feed over Server-Sent Events.
//!
//! Collaborating views (the stats strip, the revenue chart) subscribe
//! here and refresh on `clients.reloaded` instead of polling.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::state::AppState;

/// GET /api/v1/events/stream
///
/// Each domain event becomes one SSE message named after its
/// `event_type`, carrying the serialized event as data.
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.event_bus.subscribe();

    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => {
            let data = serde_json::to_string(&event).ok()?;
            Some(Ok::<_, Infallible>(
                Event::default().event(event.event_type).data(data),
            ))
        }
        // A lagged subscriber just misses the dropped events.
        Err(BroadcastStreamRecvError::Lagged(_)) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
