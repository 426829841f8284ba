//! Normalization of stored client documents (PRD-03).
//!
//! The client collection was migrated from a hosted document database and
//! carries years of schema drift: amounts appear as JSON numbers, numeric
//! strings, or not at all; dates may be garbage; intake-era fields exist on
//! some documents only. Loading must never drop or fail a record, so every
//! accessor here is total: bad input degrades to a zero/empty/`None` field
//! on an otherwise intact [`ClientRecord`].

use serde_json::Value;

use crate::client::{ClientNote, ClientRecord};
use crate::types::{ClientId, Timestamp};

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Coerce a stored amount field to a finite, non-negative `f64`.
///
/// Accepts JSON numbers and numeric strings. Anything else, including
/// negative and non-finite values, coerces to `0.0`. Idempotent: feeding
/// the result back in returns the same number.
pub fn normalize_amount(raw: Option<&Value>) -> f64 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n >= 0.0 => n,
        _ => 0.0,
    }
}

/// Read a free-text field, defaulting to the empty string.
fn text_field(doc: &Value, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Read an optional `YYYY-MM-DD` date field. Garbage parses to `None`.
fn date_field(doc: &Value, key: &str) -> Option<chrono::NaiveDate> {
    doc.get(key)
        .and_then(Value::as_str)
        .and_then(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Read an optional RFC 3339 timestamp field. Garbage parses to `None`.
fn timestamp_field(doc: &Value, key: &str) -> Option<Timestamp> {
    doc.get(key)
        .and_then(Value::as_str)
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&chrono::Utc))
}

/// Read the `notes` array. Entries missing `text` or with an unparsable
/// `at` timestamp are skipped; the record itself always survives.
fn notes_field(doc: &Value) -> Vec<ClientNote> {
    let Some(entries) = doc.get("notes").and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let text = entry.get("text").and_then(Value::as_str)?.to_string();
            let at = entry
                .get("at")
                .and_then(Value::as_str)
                .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())?
                .with_timezone(&chrono::Utc);
            Some(ClientNote { text, at })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Document -> record
// ---------------------------------------------------------------------------

/// Build a [`ClientRecord`] from a stored document.
///
/// Total over arbitrary JSON: every document maps to a record. The raw
/// `status` string is kept verbatim so unknown historical tags round-trip.
pub fn record_from_document(
    id: ClientId,
    doc: &Value,
    created_at: Timestamp,
    updated_at: Timestamp,
) -> ClientRecord {
    ClientRecord {
        id,
        name: text_field(doc, "name"),
        email: text_field(doc, "email"),
        project: text_field(doc, "project"),
        description: text_field(doc, "description"),
        value: normalize_amount(doc.get("value")),
        paid: normalize_amount(doc.get("paid")),
        deadline: date_field(doc, "deadline"),
        status: text_field(doc, "status"),
        source: doc
            .get("source")
            .and_then(Value::as_str)
            .map(str::to_string),
        last_contact: timestamp_field(doc, "last_contact"),
        notes: notes_field(doc),
        created_at,
        updated_at,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
