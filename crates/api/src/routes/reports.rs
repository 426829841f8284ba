//! Route definitions for report series.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /revenue  -> revenue (?form=line|bar&start=&end=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/revenue", get(reports::revenue))
}
