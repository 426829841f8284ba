//! Query-string DTOs for list endpoints.
//!
//! The admin screen's filter controls map 1:1 onto these parameters;
//! `all` (the dropdown default), the empty string, and absence all leave
//! that axis unfiltered.

use serde::Deserialize;

use carteira_core::client::ClientStatus;
use carteira_core::filter::ClientFilter;
use carteira_core::payment::PaymentState;
use carteira_core::report::ReportForm;

use crate::error::AppError;

/// Filter parameters for `GET /clients`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListClientsQuery {
    pub status: Option<String>,
    pub payment: Option<String>,
    pub search: Option<String>,
}

impl ListClientsQuery {
    /// Convert into the domain filter. Unknown tag values are a client
    /// mistake (the dropdowns only offer known ones) and get a 400.
    pub fn into_filter(self) -> Result<ClientFilter, AppError> {
        let status = match self.status.as_deref() {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(ClientStatus::parse(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Unknown status filter: {raw}"))
            })?),
        };

        let payment = match self.payment.as_deref() {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(PaymentState::parse(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Unknown payment filter: {raw}"))
            })?),
        };

        Ok(ClientFilter {
            status,
            payment,
            search: self.search.unwrap_or_default(),
        })
    }
}

/// Parameters for `GET /reports/revenue`.
///
/// `start`/`end` are inclusive calendar dates (`YYYY-MM-DD`) over record
/// creation; either side may be open.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RevenueReportQuery {
    pub form: Option<ReportForm>,
    pub start: Option<chrono::NaiveDate>,
    pub end: Option<chrono::NaiveDate>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
