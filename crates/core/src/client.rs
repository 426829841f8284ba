//! Client record types and lifecycle status (PRD-03).
//!
//! A [`ClientRecord`] is the fully normalized in-memory form of one stored
//! client document. The stored documents are heterogeneous (the collection
//! was migrated from a hosted document database), so normalization lives in
//! [`crate::normalize`] and everything downstream works with this type only.

use serde::{Deserialize, Serialize};

use crate::types::{ClientId, Timestamp};

// ---------------------------------------------------------------------------
// ClientStatus
// ---------------------------------------------------------------------------

/// User-set lifecycle tag for a client engagement.
///
/// Stored as text. Historical documents may carry values outside this enum;
/// those round-trip as raw strings on [`ClientRecord::status`] and only the
/// display label falls back (see [`crate::view::status_label`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    Pending,
    Completed,
}

impl ClientStatus {
    /// The canonical stored form of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Parse a stored tag. Returns `None` for unknown historical values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(Self::Active),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Human-readable label for display in the admin table (pt-BR).
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Pending => "Pendente",
            Self::Completed => "Concluído",
        }
    }
}

// ---------------------------------------------------------------------------
// ClientRecord
// ---------------------------------------------------------------------------

/// A free-text note appended to a client, e.g. by contact-form intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientNote {
    pub text: String,
    pub at: Timestamp,
}

/// One client engagement, normalized from its stored document.
///
/// `value` and `paid` are always finite and non-negative here; loading
/// coerces anything unparsable to zero rather than dropping the record.
/// `status` keeps the raw stored tag so unknown historical values survive
/// a read-modify-write cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub project: String,
    pub description: String,
    /// Total agreed price.
    pub value: f64,
    /// Amount received so far.
    pub paid: f64,
    /// Due date (end of that calendar day).
    pub deadline: Option<chrono::NaiveDate>,
    /// Raw lifecycle tag, usually one of [`ClientStatus`].
    pub status: String,
    /// Where the record came from, e.g. `"website_form"` for intake leads.
    pub source: Option<String>,
    /// Last time the contact-form intake touched this client.
    pub last_contact: Option<Timestamp>,
    pub notes: Vec<ClientNote>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
