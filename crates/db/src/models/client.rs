//! Stored client document row.

use carteira_core::client::ClientRecord;
use carteira_core::normalize::record_from_document;
use carteira_core::types::{ClientId, Timestamp};
use sqlx::FromRow;

/// One row of the `clients` collection table.
///
/// `doc` is the raw JSONB payload as it was written. Rows from the old
/// document store carry whatever shape they had at the time, so nothing
/// here is typed beyond the envelope; normalization happens on the way
/// into the domain.
#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub id: ClientId,
    pub doc: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ClientRow {
    /// Normalize the stored document into a domain record.
    ///
    /// Total: every row maps to a record, however malformed the payload.
    pub fn into_record(self) -> ClientRecord {
        record_from_document(self.id, &self.doc, self.created_at, self.updated_at)
    }
}
