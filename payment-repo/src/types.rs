//! Database row types and conversions to domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use payment_types::{Payment, PaymentId, RepoError};

/// Raw payments row as stored in SQLite.
#[derive(Debug, FromRow)]
pub struct DbPayment {
    pub id: i64,
    pub number_card: String,
    pub amount: i64,
    pub created_at: String,
}

impl DbPayment {
    /// Converts a database row into the domain type.
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| RepoError::Database(format!("invalid created_at in row: {e}")))?
            .with_timezone(&Utc);

        Ok(Payment::from_parts(
            PaymentId::from_i64(self.id),
            self.number_card,
            self.amount,
            created_at,
        ))
    }
}
