use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::ClientStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: carteira_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Authoritative in-memory client cache and write mediator.
    pub store: Arc<ClientStore>,
    /// Event bus for publishing domain events to live subscribers.
    pub event_bus: Arc<carteira_events::EventBus>,
}
