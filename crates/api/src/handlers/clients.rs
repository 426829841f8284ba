//! Handlers for the `/clients` resource.
//!
//! All reads serve from the store's cached snapshot; writes go through the
//! store so every successful one is followed by a full reload.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use carteira_core::client::ClientRecord;
use carteira_core::error::CoreError;
use carteira_core::filter::apply_filter;
use carteira_core::stats::AggregateStats;
use carteira_core::types::{ClientId, Timestamp};
use carteira_core::validation::{validate_submission, RawSubmission};
use carteira_core::view::{format_row, RowPresentation};

use crate::error::{AppError, AppResult};
use crate::query::ListClientsQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload of `GET /clients`: the filtered table plus list-wide stats.
#[derive(Debug, Serialize)]
pub struct ClientList {
    pub rows: Vec<RowPresentation>,
    /// Stats over the whole cached set, not the filtered subset.
    pub stats: AggregateStats,
    /// Size of the unfiltered cached set.
    pub total: usize,
    pub loaded_at: Timestamp,
}

/// Payload of `POST /clients/reload`.
#[derive(Debug, Serialize)]
pub struct ReloadSummary {
    pub count: usize,
    pub stats: AggregateStats,
    pub loaded_at: Timestamp,
}

/// GET /api/v1/clients
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListClientsQuery>,
) -> AppResult<Json<DataResponse<ClientList>>> {
    let filter = query.into_filter()?;
    let snapshot = state.store.snapshot().await;

    let rows: Vec<RowPresentation> = apply_filter(&snapshot.records, &filter)
        .into_iter()
        .map(format_row)
        .collect();

    Ok(Json(DataResponse {
        data: ClientList {
            rows,
            stats: snapshot.stats,
            total: snapshot.records.len(),
            loaded_at: snapshot.loaded_at,
        },
    }))
}

/// GET /api/v1/clients/{id}
///
/// Returns the raw record for edit-form prefill and marks it as under
/// edit; an edit already in progress is silently replaced.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> AppResult<Json<DataResponse<ClientRecord>>> {
    let record = state
        .store
        .begin_edit(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(DataResponse { data: record }))
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RawSubmission>,
) -> AppResult<(StatusCode, Json<DataResponse<ClientRecord>>)> {
    let valid = validate_submission(input)?;
    let record = state.store.create(&valid).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
    Json(input): Json<RawSubmission>,
) -> AppResult<Json<DataResponse<ClientRecord>>> {
    let valid = validate_submission(input)?;
    let record = state
        .store
        .update(id, &valid)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> AppResult<StatusCode> {
    let deleted = state.store.delete(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}

/// POST /api/v1/clients/reload
///
/// Explicit resync for page mount and the manual refresh button. A fetch
/// failure degrades silently: the previous snapshot is what comes back.
pub async fn reload(State(state): State<AppState>) -> Json<DataResponse<ReloadSummary>> {
    state.store.load().await;
    let snapshot = state.store.snapshot().await;

    Json(DataResponse {
        data: ReloadSummary {
            count: snapshot.records.len(),
            stats: snapshot.stats,
            loaded_at: snapshot.loaded_at,
        },
    })
}

/// GET /api/v1/clients/stats
pub async fn stats(State(state): State<AppState>) -> Json<DataResponse<AggregateStats>> {
    let snapshot = state.store.snapshot().await;
    Json(DataResponse {
        data: snapshot.stats,
    })
}

/// POST /api/v1/clients/edit/cancel
pub async fn cancel_edit(State(state): State<AppState>) -> StatusCode {
    state.store.cancel_edit().await;
    StatusCode::NO_CONTENT
}
