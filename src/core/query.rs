//! Read-only charge queries.
//!
//! Both listings accept an optional unit and an optional period, each matched exactly.
//! A unit of `0` or an empty period label counts as "no filter". Results are ordered by id.

use crate::{
    entities::{Charge, charge},
    errors::Result,
};
use sea_orm::{QueryOrder, Select, prelude::*};
use serde::Deserialize;

/// Optional filters shared by the charge and payment listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChargeFilter {
    /// Only charges billed to this unit
    pub unit_id: Option<i64>,
    /// Only charges for this period label
    pub period: Option<String>,
}

impl ChargeFilter {
    fn apply(&self, mut query: Select<Charge>) -> Select<Charge> {
        if let Some(unit_id) = self.unit_id.filter(|id| *id != 0) {
            query = query.filter(charge::Column::UnitId.eq(unit_id));
        }
        if let Some(period) = self.period.as_deref().filter(|p| !p.is_empty()) {
            query = query.filter(charge::Column::Period.eq(period));
        }
        query.order_by_asc(charge::Column::Id)
    }
}

/// Lists all charges matching the filter.
pub async fn list_charges<C>(db: &C, filter: &ChargeFilter) -> Result<Vec<charge::Model>>
where
    C: ConnectionTrait,
{
    filter
        .apply(Charge::find())
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists paid charges matching the filter.
pub async fn list_paid_charges<C>(db: &C, filter: &ChargeFilter) -> Result<Vec<charge::Model>>
where
    C: ConnectionTrait,
{
    filter
        .apply(Charge::find().filter(charge::Column::Paid.eq(true)))
        .all(db)
        .await
        .map_err(Into::into)
}
