//! Request and response bodies for the JSON API.

use crate::{
    core::{payment::PaymentOutcome, period::PaymentStatus},
    entities::ChargeModel,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate-charges`
#[derive(Debug, Deserialize)]
pub struct GenerateChargesRequest {
    /// Billing year
    pub year: i32,
    /// Billing month; omitted means the whole year
    #[serde(default)]
    pub month: Option<i32>,
    /// Units to bill
    pub units: Vec<i64>,
}

/// Response of `POST /generate-charges`
#[derive(Debug, Serialize)]
pub struct GenerateChargesResponse {
    /// Confirmation message
    pub message: String,
    /// Charges created by this request
    pub charges: Vec<ChargeModel>,
}

/// Body of `POST /pay-charge`
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    /// Unit paying
    pub unit_id: i64,
    /// Period label of the charge being paid
    pub period: String,
    /// Date the payment was made
    pub payment_date: NaiveDate,
}

/// Status reported back for a payment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentResponseStatus {
    /// Recorded within the deadline
    OnTime,
    /// Recorded after the deadline
    Late,
    /// Charge was already paid
    Duplicate,
}

impl From<PaymentStatus> for PaymentResponseStatus {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::OnTime => Self::OnTime,
            PaymentStatus::Late => Self::Late,
        }
    }
}

/// Response of `POST /pay-charge`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PaymentResponse {
    /// Payment was recorded
    Recorded {
        /// Status message naming the classification
        message: String,
        /// Echoed unit
        unit_id: i64,
        /// Echoed period
        period: String,
        /// Echoed payment date
        payment_date: NaiveDate,
        /// Last on-time date for the period
        deadline: NaiveDate,
        /// On-time or late
        status: PaymentResponseStatus,
    },
    /// Charge had already been paid
    Duplicate {
        /// Duplicate-payment notice
        message: String,
        /// Always `duplicate`
        status: PaymentResponseStatus,
    },
}

impl PaymentResponse {
    /// Builds the response for a payment outcome, echoing the request fields.
    #[must_use]
    pub fn from_outcome(request: PaymentRequest, outcome: &PaymentOutcome) -> Self {
        match outcome {
            PaymentOutcome::Recorded {
                status, deadline, ..
            } => Self::Recorded {
                message: format!("Payment registered: {}", status.description()),
                unit_id: request.unit_id,
                period: request.period,
                payment_date: request.payment_date,
                deadline: *deadline,
                status: (*status).into(),
            },
            PaymentOutcome::Duplicate { .. } => Self::Duplicate {
                message: "Duplicate payment".to_string(),
                status: PaymentResponseStatus::Duplicate,
            },
        }
    }
}

/// Response of `GET /charges`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChargeListResponse {
    /// At least one charge matched
    Charges {
        /// Matching charges
        charges: Vec<ChargeModel>,
    },
    /// Nothing matched; informational, not an error
    Empty {
        /// No-results notice
        message: String,
    },
}

impl From<Vec<ChargeModel>> for ChargeListResponse {
    fn from(charges: Vec<ChargeModel>) -> Self {
        if charges.is_empty() {
            Self::Empty {
                message: "No charges found for the given parameters.".to_string(),
            }
        } else {
            Self::Charges { charges }
        }
    }
}

/// Response of `GET /payments`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PaymentListResponse {
    /// At least one paid charge matched
    Payments {
        /// Matching paid charges
        payments: Vec<ChargeModel>,
    },
    /// Nothing matched; informational, not an error
    Empty {
        /// No-results notice
        message: String,
    },
}

impl From<Vec<ChargeModel>> for PaymentListResponse {
    fn from(payments: Vec<ChargeModel>) -> Self {
        if payments.is_empty() {
            Self::Empty {
                message: "No payments found for the given parameters.".to_string(),
            }
        } else {
            Self::Payments { payments }
        }
    }
}

/// Error body returned for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// What went wrong
    pub detail: String,
}
