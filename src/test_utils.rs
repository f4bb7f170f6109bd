//! Shared test utilities.
//!
//! This module provides helpers for setting up in-memory test databases
//! and seeding them with charges.

use crate::{core::charge, entities, errors::Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber that writes through the test harness.
/// Safe to call from every test; only the first call installs it.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a single unpaid charge with an arbitrary period label.
///
/// # Defaults
/// * `amount`: [`charge::CHARGE_AMOUNT`]
pub async fn create_test_charge(
    db: &DatabaseConnection,
    unit_id: i64,
    period: &str,
) -> Result<entities::charge::Model> {
    let model = entities::charge::ActiveModel {
        unit_id: Set(unit_id),
        period: Set(period.to_string()),
        amount: Set(charge::CHARGE_AMOUNT),
        paid: Set(false),
        payment_date: Set(None),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Sets up a test database holding one unpaid charge for `unit_id` in `period`.
pub async fn setup_with_charge(unit_id: i64, period: &str) -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    create_test_charge(&db, unit_id, period).await?;
    Ok(db)
}
