//! Revenue report series for the charting collaborator (PRD-12).
//!
//! The chart consumes plain `(date, amount)` points; all bucketing and
//! accumulation happens here, over the already-normalized cached records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::client::ClientRecord;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which series shape to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportForm {
    /// Running cumulative agreed value, one point per record.
    #[default]
    Line,
    /// Per-deadline-date sums of agreed value.
    Bar,
}

/// One point of a report series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: chrono::NaiveDate,
    pub amount: f64,
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Select records created inside the inclusive `[start, end]` window.
///
/// Bounds are calendar dates compared against the record's UTC creation
/// date, so `end` covers the whole final day. `None` leaves that side open.
pub fn filter_by_creation_range<'a>(
    records: &'a [ClientRecord],
    start: Option<chrono::NaiveDate>,
    end: Option<chrono::NaiveDate>,
) -> Vec<&'a ClientRecord> {
    records
        .iter()
        .filter(|r| {
            let created = r.created_at.date_naive();
            if let Some(start) = start {
                if created < start {
                    return false;
                }
            }
            if let Some(end) = end {
                if created > end {
                    return false;
                }
            }
            true
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// Cumulative agreed value over creation time (the line form).
///
/// Zero-value records are skipped; the rest are ordered by creation time
/// ascending and each contributes one point carrying the running total.
pub fn cumulative_by_creation(records: &[&ClientRecord]) -> Vec<SeriesPoint> {
    let mut dated: Vec<&ClientRecord> = records.iter().copied().filter(|r| r.value > 0.0).collect();
    dated.sort_by_key(|r| r.created_at);

    let mut running = 0.0;
    dated
        .into_iter()
        .map(|r| {
            running += r.value;
            SeriesPoint {
                date: r.created_at.date_naive(),
                amount: running,
            }
        })
        .collect()
}

/// Agreed value summed per exact deadline date (the bar form).
///
/// Records without a deadline are skipped. Points come out in ascending
/// date order.
pub fn bucket_by_deadline(records: &[&ClientRecord]) -> Vec<SeriesPoint> {
    let mut buckets: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
    for record in records {
        if let Some(deadline) = record.deadline {
            *buckets.entry(deadline).or_insert(0.0) += record.value;
        }
    }
    buckets
        .into_iter()
        .map(|(date, amount)| SeriesPoint { date, amount })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClientId;

    fn record_created(created: &str, value: f64) -> ClientRecord {
        ClientRecord {
            id: ClientId::new_v4(),
            name: "Cliente".to_string(),
            email: "c@example.com".to_string(),
            project: "Projeto".to_string(),
            description: String::new(),
            value,
            paid: 0.0,
            deadline: None,
            status: "active".to_string(),
            source: None,
            last_contact: None,
            notes: Vec::new(),
            created_at: chrono::DateTime::parse_from_rfc3339(created)
                .unwrap()
                .with_timezone(&chrono::Utc),
            updated_at: chrono::Utc::now(),
        }
    }

    fn date(s: &str) -> chrono::NaiveDate {
        chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // -- filter_by_creation_range --

    #[test]
    fn range_end_includes_the_whole_final_day() {
        let records = vec![
            record_created("2026-01-10T08:00:00Z", 100.0),
            // Late on the end date: still inside the window.
            record_created("2026-01-31T23:45:00Z", 200.0),
            record_created("2026-02-01T00:10:00Z", 300.0),
        ];
        let out = filter_by_creation_range(&records, Some(date("2026-01-01")), Some(date("2026-01-31")));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn open_bounds_pass_everything() {
        let records = vec![
            record_created("2025-06-01T00:00:00Z", 100.0),
            record_created("2026-06-01T00:00:00Z", 200.0),
        ];
        assert_eq!(filter_by_creation_range(&records, None, None).len(), 2);
        assert_eq!(
            filter_by_creation_range(&records, Some(date("2026-01-01")), None).len(),
            1
        );
    }

    // -- cumulative_by_creation --

    #[test]
    fn cumulative_series_sums_in_creation_order() {
        let records = vec![
            record_created("2026-01-20T00:00:00Z", 300.0),
            record_created("2026-01-05T00:00:00Z", 100.0),
            record_created("2026-01-10T00:00:00Z", 200.0),
        ];
        let refs: Vec<&ClientRecord> = records.iter().collect();
        let series = cumulative_by_creation(&refs);

        let amounts: Vec<f64> = series.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, [100.0, 300.0, 600.0]);
        assert_eq!(series[0].date, date("2026-01-05"));
        assert_eq!(series[2].date, date("2026-01-20"));
    }

    #[test]
    fn cumulative_series_skips_zero_value_records() {
        let records = vec![
            record_created("2026-01-05T00:00:00Z", 0.0),
            record_created("2026-01-10T00:00:00Z", 200.0),
        ];
        let refs: Vec<&ClientRecord> = records.iter().collect();
        let series = cumulative_by_creation(&refs);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].amount, 200.0);
    }

    #[test]
    fn cumulative_series_is_monotone_non_decreasing() {
        let records = vec![
            record_created("2026-01-01T00:00:00Z", 50.0),
            record_created("2026-01-02T00:00:00Z", 10.0),
            record_created("2026-01-03T00:00:00Z", 0.5),
        ];
        let refs: Vec<&ClientRecord> = records.iter().collect();
        let series = cumulative_by_creation(&refs);
        for pair in series.windows(2) {
            assert!(pair[1].amount >= pair[0].amount);
            assert!(pair[1].date >= pair[0].date);
        }
    }

    #[test]
    fn cumulative_series_over_empty_set_is_empty() {
        assert!(cumulative_by_creation(&[]).is_empty());
    }

    // -- bucket_by_deadline --

    #[test]
    fn deadline_buckets_sum_per_exact_date() {
        let mut a = record_created("2026-01-01T00:00:00Z", 100.0);
        a.deadline = Some(date("2026-03-31"));
        let mut b = record_created("2026-01-02T00:00:00Z", 250.0);
        b.deadline = Some(date("2026-03-31"));
        let mut c = record_created("2026-01-03T00:00:00Z", 40.0);
        c.deadline = Some(date("2026-02-15"));
        let d = record_created("2026-01-04T00:00:00Z", 999.0); // no deadline

        let records = [&a, &b, &c, &d];
        let series = bucket_by_deadline(&records);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, date("2026-02-15"));
        assert_eq!(series[0].amount, 40.0);
        assert_eq!(series[1].date, date("2026-03-31"));
        assert_eq!(series[1].amount, 350.0);
    }
}
