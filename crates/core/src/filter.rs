//! Client list filtering (PRD-05).
//!
//! A record passes when every active criterion passes; inactive criteria
//! (`None` / empty) pass everything. Output order is input order, so the
//! rendered table never reshuffles as filters toggle.

use crate::client::{ClientRecord, ClientStatus};
use crate::payment::PaymentState;

/// Active filter criteria for the client list.
///
/// `None` means "all" for the two tag criteria; an empty `search` string
/// deactivates the text search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientFilter {
    pub status: Option<ClientStatus>,
    pub payment: Option<PaymentState>,
    pub search: String,
}

impl ClientFilter {
    /// Whether a single record passes every active criterion.
    pub fn matches(&self, record: &ClientRecord) -> bool {
        if let Some(status) = self.status {
            if record.status != status.as_str() {
                return false;
            }
        }

        if let Some(payment) = self.payment {
            if PaymentState::derive(record.value, record.paid) != payment {
                return false;
            }
        }

        if !self.search.is_empty() {
            let haystack = format!(
                "{} {} {} {}",
                record.name, record.email, record.project, record.description
            )
            .to_lowercase();
            if !haystack.contains(&self.search.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// Apply a filter to a record list, preserving order.
pub fn apply_filter<'a>(records: &'a [ClientRecord], filter: &ClientFilter) -> Vec<&'a ClientRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
