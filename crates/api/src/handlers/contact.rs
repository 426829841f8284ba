//! Handlers for contact intake and the back-office message inbox.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use carteira_core::contact::{validate_contact, ContactSubmission};
use carteira_core::error::CoreError;
use carteira_core::types::MessageId;
use carteira_db::models::contact::{ContactMessage, CreateContactMessage};
use carteira_db::repositories::ContactRepo;
use carteira_events::DomainEvent;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// The public site posts here. The message is validated and persisted
/// synchronously; promotion into a client record runs in a spawned task
/// because the submitter already got their confirmation and must never
/// see a promotion failure.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactSubmission>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactMessage>>)> {
    let valid = validate_contact(input)?;

    let message = ContactRepo::create(
        &state.pool,
        &CreateContactMessage {
            name: valid.name.clone(),
            email: valid.email.clone(),
            message: valid.message.clone(),
        },
    )
    .await?;

    state.event_bus.publish(
        DomainEvent::new("contact.received")
            .with_source("contact_message", message.id)
            .with_payload(serde_json::json!({ "email": message.email })),
    );

    let store = Arc::clone(&state.store);
    tokio::spawn(async move {
        store.promote_contact(&valid).await;
    });

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// GET /api/v1/contact
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ContactMessage>>>> {
    let messages = ContactRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/contact/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<MessageId>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    let marked = ContactRepo::mark_read(&state.pool, id).await?;
    if !marked {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }

    let message = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;
    Ok(Json(DataResponse { data: message }))
}
