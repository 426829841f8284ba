//! Aggregate statistics over the cached client list.
//!
//! Recomputed into every cache snapshot on reload; the stat cards and the
//! revenue report header both read from here rather than re-summing in
//! handlers.

use serde::Serialize;

use crate::client::ClientRecord;

// ---------------------------------------------------------------------------
// List stats
// ---------------------------------------------------------------------------

/// Headline numbers for the admin list view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Sum of `paid` across all records.
    pub total_paid: f64,
    /// Number of records.
    pub count: usize,
    /// `total_paid / count`, zero for an empty list.
    pub average_paid: f64,
}

/// Compute list stats over a record slice.
pub fn aggregate_stats(records: &[ClientRecord]) -> AggregateStats {
    let total_paid: f64 = records.iter().map(|r| r.paid).sum();
    let count = records.len();
    let average_paid = if count == 0 {
        0.0
    } else {
        total_paid / count as f64
    };
    AggregateStats {
        total_paid,
        count,
        average_paid,
    }
}

// ---------------------------------------------------------------------------
// Revenue summary
// ---------------------------------------------------------------------------

/// Value-based totals shown beside the revenue report series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueSummary {
    /// Sum of agreed values.
    pub total_value: f64,
    /// Sum of amounts received.
    pub total_received: f64,
    /// `total_value - total_received`. Negative when historical records
    /// are overpaid.
    pub total_pending: f64,
    pub count: usize,
    /// `total_value / count`, zero for an empty set.
    pub average_value: f64,
}

/// Compute the revenue summary over a record slice (typically the
/// range-filtered set the series was built from).
pub fn revenue_summary(records: &[&ClientRecord]) -> RevenueSummary {
    let total_value: f64 = records.iter().map(|r| r.value).sum();
    let total_received: f64 = records.iter().map(|r| r.paid).sum();
    let count = records.len();
    let average_value = if count == 0 {
        0.0
    } else {
        total_value / count as f64
    };
    RevenueSummary {
        total_value,
        total_received,
        total_pending: total_value - total_received,
        count,
        average_value,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClientId;

    fn record(value: f64, paid: f64) -> ClientRecord {
        ClientRecord {
            id: ClientId::new_v4(),
            name: "Cliente".to_string(),
            email: "c@example.com".to_string(),
            project: "Projeto".to_string(),
            description: String::new(),
            value,
            paid,
            deadline: None,
            status: "active".to_string(),
            source: None,
            last_contact: None,
            notes: Vec::new(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    // -- aggregate_stats --

    #[test]
    fn empty_list_has_zeroed_stats() {
        let stats = aggregate_stats(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_paid, 0.0);
        // No division by zero: average is defined as 0 for an empty list.
        assert_eq!(stats.average_paid, 0.0);
    }

    #[test]
    fn totals_and_average_add_up() {
        let records = vec![record(1000.0, 600.0), record(500.0, 0.0), record(2000.0, 900.0)];
        let stats = aggregate_stats(&records);
        assert_eq!(stats.count, 3);
        assert!((stats.total_paid - 1500.0).abs() < f64::EPSILON);
        assert!((stats.average_paid - 500.0).abs() < f64::EPSILON);
    }

    // -- revenue_summary --

    #[test]
    fn revenue_summary_over_empty_set_is_zeroed() {
        let summary = revenue_summary(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.average_value, 0.0);
    }

    #[test]
    fn revenue_summary_totals() {
        let a = record(1000.0, 250.0);
        let b = record(3000.0, 3000.0);
        let summary = revenue_summary(&[&a, &b]);
        assert!((summary.total_value - 4000.0).abs() < f64::EPSILON);
        assert!((summary.total_received - 3250.0).abs() < f64::EPSILON);
        assert!((summary.total_pending - 750.0).abs() < f64::EPSILON);
        assert!((summary.average_value - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn revenue_pending_goes_negative_when_overpaid() {
        let a = record(100.0, 150.0);
        let summary = revenue_summary(&[&a]);
        assert!((summary.total_pending - (-50.0)).abs() < f64::EPSILON);
    }
}
