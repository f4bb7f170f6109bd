//! Core business logic - framework-agnostic charge, payment and query operations.

/// Charge generation
pub mod charge;
/// Payment registration and classification
pub mod payment;
/// Billing period labels and deadlines
pub mod period;
/// Charge and payment listings
pub mod query;
