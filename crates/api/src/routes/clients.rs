//! Route definitions for the `/clients` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::clients;
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// POST   /reload       -> reload
/// GET    /stats        -> stats
/// POST   /edit/cancel  -> cancel_edit
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route("/reload", post(clients::reload))
        .route("/stats", get(clients::stats))
        .route("/edit/cancel", post(clients::cancel_edit))
        .route(
            "/{id}",
            get(clients::get_by_id)
                .put(clients::update)
                .delete(clients::delete),
        )
}
