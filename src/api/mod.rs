//! HTTP layer - axum router, handlers and JSON bodies
//!
//! Routes:
//! * `POST /generate-charges` - bill units for a year or a single month
//! * `POST /pay-charge` - register a payment against a charge
//! * `GET /payments` - list paid charges, optionally by unit and/or period
//! * `GET /charges` - list all charges, optionally by unit and/or period
//! * `GET /ping` - liveness probe

mod error;
/// Endpoint handlers
pub mod handlers;
/// Request and response bodies
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state available to all handlers.
/// Holds the pooled database connection behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Creates a new `AppState` around the given database connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/generate-charges", post(handlers::generate_charges))
        .route("/pay-charge", post(handlers::pay_charge))
        .route("/payments", get(handlers::list_payments))
        .route("/charges", get(handlers::list_charges))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
