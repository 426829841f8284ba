pub mod clients;
pub mod contact;
pub mod events;
pub mod health;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                   list, create
/// /clients/reload            explicit resync (POST)
/// /clients/stats             aggregate stats (GET)
/// /clients/edit/cancel       cancel editing session (POST)
/// /clients/{id}              get (marks editing), update, delete
///
/// /reports/revenue           revenue series + summary (GET)
///
/// /contact                   submit (POST, public), list (GET)
/// /contact/{id}/read         mark read (POST)
///
/// /events/stream             live domain events (SSE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Client list, writes, cache control, edit session.
        .nest("/clients", clients::router())
        // Revenue report series for the chart view.
        .nest("/reports", reports::router())
        // Public contact intake and the back-office inbox.
        .nest("/contact", contact::router())
        // Live event feed.
        .nest("/events", events::router())
}
