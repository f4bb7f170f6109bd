//! Charge entity - One common-expense charge billed to a unit for a period.
//!
//! Each charge has a `unit_id`, a `period` label (`YYYY-MM`), a fixed amount,
//! a `paid` flag and an optional `payment_date` that is only set once paid.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Charge database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "charges")]
pub struct Model {
    /// Unique identifier for the charge
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unit (apartment) the charge is billed to
    #[sea_orm(indexed)]
    pub unit_id: i64,
    /// Billing period label, `YYYY-MM`
    pub period: String,
    /// Amount billed
    pub amount: f64,
    /// Whether the charge has been paid
    pub paid: bool,
    /// Date the payment was made, present only when `paid` is true
    pub payment_date: Option<Date>,
}

/// Charges have no relationships to other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
