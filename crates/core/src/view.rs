//! Table-row presentation for the admin client list (PRD-05).
//!
//! [`format_row`] is the only path from a [`ClientRecord`] to display
//! strings. Every free-text field is HTML-escaped here, currency and dates
//! are rendered pt-BR, and the payment progress percentage is computed from
//! the normalized amounts. Keeping this server-side means every consumer of
//! the API renders identically.

use serde::Serialize;

use crate::client::{ClientRecord, ClientStatus};
use crate::payment::{progress_percent, PaymentState};
use crate::types::ClientId;

/// Placeholder rendered when a client has no deadline.
pub const NO_DEADLINE_LABEL: &str = "Não definido";

// ---------------------------------------------------------------------------
// Escaping & locale formatting
// ---------------------------------------------------------------------------

/// Escape the five HTML-significant characters.
///
/// Applied to every free-text field before it reaches a template; stored
/// data is untrusted (public contact form feeds into it).
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Format an amount as pt-BR currency, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Format a calendar date as `dd/mm/yyyy`.
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Display label for a raw status tag.
///
/// Known tags map to their pt-BR labels; unknown historical tags fall back
/// to the raw value, escaped.
pub fn status_label(raw: &str) -> String {
    match ClientStatus::parse(raw) {
        Some(status) => status.label().to_string(),
        None => escape_html(raw),
    }
}

// ---------------------------------------------------------------------------
// RowPresentation
// ---------------------------------------------------------------------------

/// One fully formatted table row for the admin client list.
///
/// Text fields are HTML-escaped; `status_key` keeps the raw tag so the
/// filter controls can still target the row.
#[derive(Debug, Clone, Serialize)]
pub struct RowPresentation {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub project: String,
    pub description: String,
    pub status_key: String,
    pub status_label: String,
    pub payment_state: PaymentState,
    pub payment_label: &'static str,
    pub value: f64,
    pub paid: f64,
    pub value_display: String,
    pub paid_display: String,
    pub progress_percent: i64,
    pub deadline_display: String,
}

/// Project a record into its display row.
pub fn format_row(record: &ClientRecord) -> RowPresentation {
    let payment_state = PaymentState::derive(record.value, record.paid);
    RowPresentation {
        id: record.id,
        name: escape_html(&record.name),
        email: escape_html(&record.email),
        project: escape_html(&record.project),
        description: escape_html(&record.description),
        status_key: record.status.clone(),
        status_label: status_label(&record.status),
        payment_state,
        payment_label: payment_state.label(),
        value: record.value,
        paid: record.paid,
        value_display: format_brl(record.value),
        paid_display: format_brl(record.paid),
        progress_percent: progress_percent(record.value, record.paid),
        deadline_display: record
            .deadline
            .map(format_date)
            .unwrap_or_else(|| NO_DEADLINE_LABEL.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
