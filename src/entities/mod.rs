//! Entity module - Contains the `SeaORM` entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod charge;

pub use charge::{Column as ChargeColumn, Entity as Charge, Model as ChargeModel};
