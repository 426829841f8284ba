//! Route definitions for the live event feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET /stream  -> stream (SSE)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/stream", get(events::stream))
}
