//! Handlers for the revenue report series (PRD-12).

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use carteira_core::report::{
    bucket_by_deadline, cumulative_by_creation, filter_by_creation_range, ReportForm, SeriesPoint,
};
use carteira_core::stats::{revenue_summary, RevenueSummary};

use crate::query::RevenueReportQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload of `GET /reports/revenue`: the series plus its summary.
#[derive(Debug, Serialize)]
pub struct RevenueReport {
    pub form: ReportForm,
    pub points: Vec<SeriesPoint>,
    /// Summary over every record in range, including the ones that
    /// produced no point (zero value, no deadline).
    pub summary: RevenueSummary,
}

/// GET /api/v1/reports/revenue
///
/// Serves from the cached snapshot; the optional date range is inclusive
/// on both calendar ends and applies to record creation dates.
pub async fn revenue(
    State(state): State<AppState>,
    Query(query): Query<RevenueReportQuery>,
) -> Json<DataResponse<RevenueReport>> {
    let snapshot = state.store.snapshot().await;
    let form = query.form.unwrap_or_default();

    let in_range = filter_by_creation_range(&snapshot.records, query.start, query.end);
    let points = match form {
        ReportForm::Line => cumulative_by_creation(&in_range),
        ReportForm::Bar => bucket_by_deadline(&in_range),
    };
    let summary = revenue_summary(&in_range);

    Json(DataResponse {
        data: RevenueReport {
            form,
            points,
            summary,
        },
    })
}
