//! Payment registration business logic.
//!
//! A payment is matched to the first charge (lowest id) with the same unit and period
//! label, compared exactly. Paying an already-paid charge is reported as a duplicate and
//! leaves the stored payment date untouched. Otherwise the charge is marked paid and the
//! payment is classified against the period deadline (see [`period::payment_deadline`]).
//!
//! The lookup and the update run inside one database transaction; any early return drops
//! the transaction, which rolls it back and releases the connection.

use crate::{
    core::period::{self, PaymentStatus},
    entities::{Charge, charge},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, warn};

/// Result of registering a payment
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    /// The charge was unpaid and is now marked paid
    Recorded {
        /// The charge after the update
        charge: charge::Model,
        /// On-time or late classification
        status: PaymentStatus,
        /// Last on-time date for the charge's period
        deadline: NaiveDate,
    },
    /// The charge was already paid; nothing was changed
    Duplicate {
        /// The charge as stored, with its original payment date
        charge: charge::Model,
    },
}

/// Registers a payment for a unit's charge in the given period.
///
/// # Errors
/// * [`Error::ChargeNotFound`] if no charge matches `unit_id` and `period`
/// * [`Error::InvalidPeriod`] if the matching charge's period is not `YYYY-MM`
/// * [`Error::Database`] on any storage failure
pub async fn register_payment(
    db: &DatabaseConnection,
    unit_id: i64,
    period_label: &str,
    payment_date: NaiveDate,
) -> Result<PaymentOutcome> {
    let txn = db.begin().await?;

    let charge = Charge::find()
        .filter(charge::Column::UnitId.eq(unit_id))
        .filter(charge::Column::Period.eq(period_label))
        .order_by_asc(charge::Column::Id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::ChargeNotFound {
            unit_id,
            period: period_label.to_string(),
        })?;

    if charge.paid {
        warn!("Duplicate payment for unit {unit_id} in period {period_label}");
        return Ok(PaymentOutcome::Duplicate { charge });
    }

    // Compute the deadline before updating the row
    let deadline = period::payment_deadline(&charge.period)?;

    let mut active_model: charge::ActiveModel = charge.into();
    active_model.paid = Set(true);
    active_model.payment_date = Set(Some(payment_date));
    let charge = active_model.update(&txn).await?;

    txn.commit().await?;

    let status = PaymentStatus::classify(payment_date, deadline);
    info!(
        "Recorded payment for unit {unit_id} in period {period_label} on {payment_date}: {status:?}"
    );

    Ok(PaymentOutcome::Recorded {
        charge,
        status,
        deadline,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::charge::generate_charges;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_register_payment_not_found_mock() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<charge::Model>::new()])
            .into_connection();

        let result = register_payment(&db, 999, "2024-03", date(2024, 3, 10)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ChargeNotFound { unit_id: 999, .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_payment_not_found() -> Result<()> {
        let db = setup_with_charge(1, "2024-03").await?;

        // Wrong unit, wrong period, and a non-normalized label all miss
        for (unit, label) in [(2, "2024-03"), (1, "2024-04"), (1, "2024-3")] {
            let result = register_payment(&db, unit, label, date(2024, 3, 10)).await;
            assert!(matches!(result, Err(Error::ChargeNotFound { .. })));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_payment_on_deadline_is_on_time() -> Result<()> {
        let db = setup_with_charge(1, "2024-03").await?;

        let outcome = register_payment(&db, 1, "2024-03", date(2024, 3, 31)).await?;

        let PaymentOutcome::Recorded {
            charge,
            status,
            deadline,
        } = outcome
        else {
            panic!("expected a recorded payment");
        };
        assert_eq!(status, PaymentStatus::OnTime);
        assert_eq!(deadline, date(2024, 3, 31));
        assert!(charge.paid);
        assert_eq!(charge.payment_date, Some(date(2024, 3, 31)));

        Ok(())
    }

    #[tokio::test]
    async fn test_payment_after_deadline_is_late() -> Result<()> {
        let db = setup_with_charge(1, "2024-03").await?;

        let outcome = register_payment(&db, 1, "2024-03", date(2024, 4, 1)).await?;

        assert!(matches!(
            outcome,
            PaymentOutcome::Recorded {
                status: PaymentStatus::Late,
                ..
            }
        ));

        let stored = Charge::find().one(&db).await?.unwrap();
        assert!(stored.paid);
        assert_eq!(stored.payment_date, Some(date(2024, 4, 1)));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_payment_keeps_first_date() -> Result<()> {
        let db = setup_with_charge(4, "2024-06").await?;

        register_payment(&db, 4, "2024-06", date(2024, 6, 5)).await?;
        let second = register_payment(&db, 4, "2024-06", date(2024, 6, 20)).await?;

        let PaymentOutcome::Duplicate { charge } = second else {
            panic!("expected a duplicate payment");
        };
        assert_eq!(charge.payment_date, Some(date(2024, 6, 5)));

        let stored = Charge::find_by_id(charge.id).one(&db).await?.unwrap();
        assert_eq!(stored.payment_date, Some(date(2024, 6, 5)));

        Ok(())
    }

    #[tokio::test]
    async fn test_payment_with_duplicate_rows_pays_first() -> Result<()> {
        let db = setup_test_db().await?;
        let first = generate_charges(&db, 2024, Some(2), &[9]).await?;
        let second = generate_charges(&db, 2024, Some(2), &[9]).await?;

        register_payment(&db, 9, "2024-02", date(2024, 3, 2)).await?;

        let first_row = Charge::find_by_id(first[0].id).one(&db).await?.unwrap();
        let second_row = Charge::find_by_id(second[0].id).one(&db).await?.unwrap();
        assert!(first_row.paid);
        assert!(!second_row.paid);

        // Paying again matches the first row, which is already paid
        let again = register_payment(&db, 9, "2024-02", date(2024, 3, 3)).await?;
        assert!(matches!(again, PaymentOutcome::Duplicate { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_period_leaves_charge_unpaid() -> Result<()> {
        let db = setup_test_db().await?;
        generate_charges(&db, 2024, Some(13), &[1]).await?;

        let result = register_payment(&db, 1, "2024-13", date(2024, 12, 1)).await;
        assert!(matches!(result, Err(Error::InvalidPeriod { .. })));

        let stored = Charge::find().one(&db).await?.unwrap();
        assert!(!stored.paid);
        assert_eq!(stored.payment_date, None);

        Ok(())
    }
}
