//! Payment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Unique identifier for a Payment record.
///
/// Ids are assigned by the database and are always numeric; path parameters
/// that do not parse as an integer are rejected before reaching storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(i64);

impl PaymentId {
    /// Creates a PaymentId from a raw database value.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A payment record keyed by the holder's card number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique identifier (database-assigned)
    pub id: PaymentId,
    /// Membership card number of the payer
    pub number_card: String,
    /// Amount in smallest currency unit (e.g., cents)
    pub amount: i64,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a payment with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: PaymentId,
        number_card: String,
        amount: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            number_card,
            amount,
            created_at,
        }
    }
}

/// Validates a card number.
///
/// Card numbers are digit strings; anything else is invalid input.
pub fn validate_number_card(number_card: &str) -> Result<(), ServiceError> {
    if number_card.is_empty() || !number_card.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::InvalidInput(
            "card number must be a non-empty string of digits".into(),
        ));
    }
    Ok(())
}
