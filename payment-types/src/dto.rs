//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::PaymentId;

/// Request body to create a new payment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Membership card number of the payer
    pub number_card: String,
    /// Amount in smallest currency unit; defaults to zero
    #[serde(default)]
    pub amount: i64,
}

/// Request body to update an existing payment record.
///
/// The record id travels in the body rather than the route path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    /// Id of the record to update
    pub id: PaymentId,
    /// New card number, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_card: Option<String>,
    /// New amount, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}
