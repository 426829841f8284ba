//! Contact message entity model and DTOs.

use carteira_core::types::{MessageId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A message submitted through the public contact form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: Timestamp,
    pub read: bool,
}

/// Fields for inserting a new contact message.
///
/// `received_at` and `read` come from table defaults.
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
