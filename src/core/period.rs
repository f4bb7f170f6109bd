//! Billing period arithmetic.
//!
//! Periods are stored as plain `YYYY-MM` labels. This module builds those labels,
//! expands a requested month into the months to bill, and derives the payment
//! deadline: the first day of the period plus a flat 30 days. The deadline is a
//! day offset, not a calendar month, so a February period ends in early March.

use crate::errors::{Error, Result};
use chrono::{Days, NaiveDate};

/// Days after the first of the period month during which a payment is on time.
pub const GRACE_DAYS: u64 = 30;

/// Formats the label for a billing period, zero-padding the month.
#[must_use]
pub fn period_label(year: i32, month: i32) -> String {
    format!("{year}-{month:02}")
}

/// Expands a requested month into the list of months to bill.
///
/// `None` and `Some(0)` both mean the whole year. Other values are passed through
/// unchecked.
#[must_use]
pub fn months_to_generate(month: Option<i32>) -> Vec<i32> {
    match month {
        Some(m) if m != 0 => vec![m],
        _ => (1..=12).collect(),
    }
}

/// Returns the first calendar day of the period.
pub fn first_day(period: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d").map_err(|_| {
        Error::InvalidPeriod {
            period: period.to_string(),
        }
    })
}

/// Returns the last on-time payment date for the period (inclusive).
pub fn payment_deadline(period: &str) -> Result<NaiveDate> {
    first_day(period)?
        .checked_add_days(Days::new(GRACE_DAYS))
        .ok_or_else(|| Error::InvalidPeriod {
            period: period.to_string(),
        })
}

/// Whether a payment arrived within the grace window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Paid on or before the deadline
    OnTime,
    /// Paid after the deadline
    Late,
}

impl PaymentStatus {
    /// Classifies a payment date against a deadline.
    #[must_use]
    pub fn classify(payment_date: NaiveDate, deadline: NaiveDate) -> Self {
        if payment_date <= deadline {
            Self::OnTime
        } else {
            Self::Late
        }
    }

    /// Human-readable description used in API messages
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::OnTime => "payment received within the deadline",
            Self::Late => "payment received after the deadline",
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_label_zero_pads_month() {
        assert_eq!(period_label(2024, 3), "2024-03");
        assert_eq!(period_label(2024, 12), "2024-12");
        // Out-of-range months are not validated
        assert_eq!(period_label(2024, 13), "2024-13");
    }

    #[test]
    fn test_months_to_generate() {
        assert_eq!(months_to_generate(None), (1..=12).collect::<Vec<_>>());
        assert_eq!(months_to_generate(Some(0)).len(), 12);
        assert_eq!(months_to_generate(Some(7)), vec![7]);
    }

    #[test]
    fn test_deadline_is_flat_thirty_days() -> Result<()> {
        assert_eq!(payment_deadline("2024-03")?, date(2024, 3, 31));
        assert_eq!(payment_deadline("2024-01")?, date(2024, 1, 31));
        // Leap-year February runs into March
        assert_eq!(payment_deadline("2024-02")?, date(2024, 3, 2));
        assert_eq!(payment_deadline("2023-02")?, date(2023, 3, 3));
        // 30-day month: deadline is the first of the next month
        assert_eq!(payment_deadline("2024-04")?, date(2024, 5, 1));
        Ok(())
    }

    #[test]
    fn test_invalid_period_labels() {
        for label in ["2024-13", "2024-00", "march", ""] {
            assert!(matches!(
                payment_deadline(label),
                Err(Error::InvalidPeriod { .. })
            ));
        }
    }

    #[test]
    fn test_classify_deadline_is_inclusive() -> Result<()> {
        let deadline = payment_deadline("2024-03")?;
        assert_eq!(
            PaymentStatus::classify(date(2024, 3, 31), deadline),
            PaymentStatus::OnTime
        );
        assert_eq!(
            PaymentStatus::classify(date(2024, 3, 1), deadline),
            PaymentStatus::OnTime
        );
        assert_eq!(
            PaymentStatus::classify(date(2024, 4, 1), deadline),
            PaymentStatus::Late
        );
        Ok(())
    }
}
