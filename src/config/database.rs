//! Database configuration module.
//!
//! This module handles the `SQLite` database connection and table creation using `SeaORM`.
//! The `charges` table and its `unit_id` index are generated from the entity definition with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust struct. Both
//! statements use `IF NOT EXISTS`, which makes bootstrap safe to run against an existing file.

use crate::entities::Charge;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

/// Establishes a pooled connection to the database at `database_url`.
///
/// The returned `DatabaseConnection` is shared by every request; each query checks a
/// connection out of the pool and returns it when done.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database at {database_url}");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `charges` table and its indexes if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut charge_table = schema.create_table_from_entity(Charge);
    charge_table.if_not_exists();
    db.execute(builder.build(&charge_table)).await?;

    for mut index in schema.create_index_from_entity(Charge) {
        index.if_not_exists();
        db.execute(builder.build(&index)).await?;
    }

    Ok(())
}
