//! Axum handlers for the charge and payment endpoints.
//!
//! Handlers decode the request, call into [`crate::core`], and shape the JSON reply.
//! Failures are returned as [`Error`], which renders itself as an HTTP response.

use super::{
    AppState,
    types::{
        ChargeListResponse, GenerateChargesRequest, GenerateChargesResponse, PaymentListResponse,
        PaymentRequest, PaymentResponse,
    },
};
use crate::{
    core::{charge, payment, query, query::ChargeFilter},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Query, State},
};
use tracing::{error, info};

/// Liveness probe for `GET /ping`
pub async fn ping() -> &'static str {
    "pong"
}

/// Handler for `POST /generate-charges`
pub async fn generate_charges(
    State(state): State<AppState>,
    Json(request): Json<GenerateChargesRequest>,
) -> Result<Json<GenerateChargesResponse>> {
    info!("POST /generate-charges - request: {:?}", request);

    let charges =
        charge::generate_charges(&*state.db, request.year, request.month, &request.units)
            .await
            .inspect_err(|e| error!("Error generating charges: {e}"))?;

    Ok(Json(GenerateChargesResponse {
        message: "Charges generated successfully".to_string(),
        charges,
    }))
}

/// Handler for `POST /pay-charge`
pub async fn pay_charge(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>> {
    info!("POST /pay-charge - request: {:?}", request);

    let outcome = payment::register_payment(
        &*state.db,
        request.unit_id,
        &request.period,
        request.payment_date,
    )
    .await
    .inspect_err(|e| match e {
        Error::ChargeNotFound { .. } => info!("{e}"),
        _ => error!("Error registering payment: {e}"),
    })?;

    Ok(Json(PaymentResponse::from_outcome(request, &outcome)))
}

/// Handler for `GET /payments`
pub async fn list_payments(
    State(state): State<AppState>,
    Query(filter): Query<ChargeFilter>,
) -> Result<Json<PaymentListResponse>> {
    info!("GET /payments - query: {:?}", filter);

    let payments = query::list_paid_charges(&*state.db, &filter).await?;
    Ok(Json(payments.into()))
}

/// Handler for `GET /charges`
pub async fn list_charges(
    State(state): State<AppState>,
    Query(filter): Query<ChargeFilter>,
) -> Result<Json<ChargeListResponse>> {
    info!("GET /charges - query: {:?}", filter);

    let charges = query::list_charges(&*state.db, &filter).await?;
    Ok(Json(charges.into()))
}
