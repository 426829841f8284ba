//! Derived payment-progress classification (PRD-03).
//!
//! [`PaymentState`] is never stored; it is a pure function of the normalized
//! `(value, paid)` pair and is recomputed wherever it is displayed or
//! filtered on.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PaymentState
// ---------------------------------------------------------------------------

/// Payment-progress classification of a client engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Paid,
    Partial,
    Pending,
}

impl PaymentState {
    /// Derive the state from normalized amounts.
    ///
    /// Total over `value >= 0, paid >= 0`. A zero-value engagement is
    /// always `Pending`, whatever was received.
    pub fn derive(value: f64, paid: f64) -> Self {
        if paid >= value && value > 0.0 {
            Self::Paid
        } else if paid > 0.0 && paid < value {
            Self::Partial
        } else {
            Self::Pending
        }
    }

    /// The canonical filter-key form of the state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Partial => "partial",
            Self::Pending => "pending",
        }
    }

    /// Parse a filter key. Returns `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "paid" => Some(Self::Paid),
            "partial" => Some(Self::Partial),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    /// Human-readable label for display in the admin table (pt-BR).
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Pago",
            Self::Partial => "Parcial",
            Self::Pending => "Pendente",
        }
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Percentage of the agreed value received, rounded to the nearest integer.
///
/// Zero when `value` is zero (no division). Deliberately uncapped:
/// historical overpaid records render above 100%.
pub fn progress_percent(value: f64, paid: f64) -> i64 {
    if value > 0.0 {
        (paid / value * 100.0).round() as i64
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- PaymentState::derive --

    #[test]
    fn fully_paid_engagement_is_paid() {
        assert_eq!(PaymentState::derive(1000.0, 1000.0), PaymentState::Paid);
    }

    #[test]
    fn overpaid_engagement_is_paid() {
        assert_eq!(PaymentState::derive(100.0, 150.0), PaymentState::Paid);
    }

    #[test]
    fn partially_paid_engagement_is_partial() {
        assert_eq!(PaymentState::derive(1000.0, 250.0), PaymentState::Partial);
    }

    #[test]
    fn unpaid_engagement_is_pending() {
        assert_eq!(PaymentState::derive(1000.0, 0.0), PaymentState::Pending);
    }

    #[test]
    fn zero_value_is_always_pending() {
        assert_eq!(PaymentState::derive(0.0, 0.0), PaymentState::Pending);
        // Even with money received: a zero-value engagement has no target.
        assert_eq!(PaymentState::derive(0.0, 500.0), PaymentState::Pending);
    }

    #[test]
    fn derive_is_total_over_the_normalized_domain() {
        // Every representative corner of (value >= 0, paid >= 0) classifies.
        for value in [0.0, 0.01, 1.0, 1000.0, 1e12] {
            for paid in [0.0, 0.01, 1.0, 999.99, 1000.0, 1e12] {
                let state = PaymentState::derive(value, paid);
                assert!(matches!(
                    state,
                    PaymentState::Paid | PaymentState::Partial | PaymentState::Pending
                ));
            }
        }
    }

    // -- parse / as_str --

    #[test]
    fn parse_round_trips_every_state() {
        for state in [PaymentState::Paid, PaymentState::Partial, PaymentState::Pending] {
            assert_eq!(PaymentState::parse(state.as_str()), Some(state));
        }
        assert_eq!(PaymentState::parse("overdue"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(PaymentState::Paid.label(), "Pago");
        assert_eq!(PaymentState::Partial.label(), "Parcial");
        assert_eq!(PaymentState::Pending.label(), "Pendente");
    }

    // -- progress_percent --

    #[test]
    fn progress_full_payment_is_100() {
        assert_eq!(progress_percent(1000.0, 1000.0), 100);
    }

    #[test]
    fn progress_quarter_payment_is_25() {
        assert_eq!(progress_percent(1000.0, 250.0), 25);
    }

    #[test]
    fn progress_zero_value_is_0() {
        assert_eq!(progress_percent(0.0, 0.0), 0);
        assert_eq!(progress_percent(0.0, 500.0), 0);
    }

    #[test]
    fn progress_rounds_to_nearest_integer() {
        assert_eq!(progress_percent(3.0, 1.0), 33);
        assert_eq!(progress_percent(3.0, 2.0), 67);
    }

    #[test]
    fn progress_is_uncapped_for_overpayment() {
        assert_eq!(progress_percent(100.0, 150.0), 150);
    }
}
