//! Charge generation business logic.
//!
//! Materializes one charge per unit per billed month. Every row is inserted and committed
//! on its own, so a storage failure part-way through leaves the rows created so far in
//! place. There is no check for existing charges: generating the same unit and period
//! twice yields two rows.

use crate::{core::period, entities::charge, errors::Result};
use sea_orm::{Set, prelude::*};
use tracing::{debug, info};

/// Amount billed for every generated charge.
pub const CHARGE_AMOUNT: f64 = 100.0;

/// Generates charges for each unit and month of the requested period.
///
/// # Arguments
/// * `year` - Billing year
/// * `month` - Billing month; `None` (or `0`) bills all twelve months of the year
/// * `unit_ids` - Units to bill, in the order the rows should be created
///
/// # Returns
/// The created charges, unit by unit and month by month.
pub async fn generate_charges<C>(
    db: &C,
    year: i32,
    month: Option<i32>,
    unit_ids: &[i64],
) -> Result<Vec<charge::Model>>
where
    C: ConnectionTrait,
{
    let months = period::months_to_generate(month);
    let mut created = Vec::with_capacity(unit_ids.len() * months.len());

    for &unit_id in unit_ids {
        for &m in &months {
            let label = period::period_label(year, m);
            debug!("Creating charge for unit {unit_id} in period {label}");

            let model = charge::ActiveModel {
                unit_id: Set(unit_id),
                period: Set(label),
                amount: Set(CHARGE_AMOUNT),
                paid: Set(false),
                payment_date: Set(None),
                ..Default::default()
            };
            created.push(model.insert(db).await?);
        }
    }

    info!(
        "Generated {} charges for {} unit(s) in {year}",
        created.len(),
        unit_ids.len()
    );
    Ok(created)
}
