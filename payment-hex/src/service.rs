//! Payment Application Service
//!
//! Decodes raw request bodies and path identifiers, then drives the
//! repository port. Contains NO transport logic - the HTTP adapter hands
//! bodies through as raw bytes so that malformed input surfaces here as
//! `ServiceError::InvalidInput` rather than a framework-level rejection.

use payment_types::{
    CreatePaymentRequest, Payment, PaymentId, PaymentRepository, ServiceError,
    UpdatePaymentRequest, domain::validate_number_card,
};

/// Application service for payment record operations.
///
/// Generic over `R: PaymentRepository` - the adapter is injected at compile
/// time via the constructor and never mutated afterward.
pub struct PaymentService<R: PaymentRepository> {
    repo: R,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a payment record from a raw JSON body.
    pub async fn create(&self, body: &[u8]) -> Result<Payment, ServiceError> {
        let req: CreatePaymentRequest = serde_json::from_slice(body)
            .map_err(|e| ServiceError::InvalidInput(format!("malformed payment body: {e}")))?;

        validate_number_card(&req.number_card)?;
        if req.amount < 0 {
            return Err(ServiceError::InvalidInput(
                "amount cannot be negative".into(),
            ));
        }

        self.repo.insert(req).await.map_err(Into::into)
    }

    /// Looks up a payment record by its raw path id.
    ///
    /// Returns `Ok(None)` when the id is well-formed but matches nothing;
    /// a non-numeric id is `InvalidInput`.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Option<Payment>, ServiceError> {
        let id = parse_id(raw_id)?;
        self.repo.find_by_id(id).await.map_err(Into::into)
    }

    /// Updates a payment record from a raw JSON body.
    ///
    /// The target id is read from the body, not a route parameter.
    /// Returns `Ok(None)` when no record has that id.
    pub async fn update(&self, body: &[u8]) -> Result<Option<Payment>, ServiceError> {
        let req: UpdatePaymentRequest = serde_json::from_slice(body)
            .map_err(|e| ServiceError::InvalidInput(format!("malformed payment body: {e}")))?;

        if let Some(number_card) = &req.number_card {
            validate_number_card(number_card)?;
        }
        if matches!(req.amount, Some(amount) if amount < 0) {
            return Err(ServiceError::InvalidInput(
                "amount cannot be negative".into(),
            ));
        }

        self.repo.update(req).await.map_err(Into::into)
    }

    /// Lists all payment records.
    pub async fn list(&self) -> Result<Vec<Payment>, ServiceError> {
        self.repo.list().await.map_err(Into::into)
    }

    /// Deletes a payment record by its raw path id, returning the number of
    /// rows affected (zero when nothing matched).
    pub async fn delete(&self, raw_id: &str) -> Result<u64, ServiceError> {
        let id = parse_id(raw_id)?;
        self.repo.delete(id).await.map_err(Into::into)
    }
}

fn parse_id(raw_id: &str) -> Result<PaymentId, ServiceError> {
    raw_id
        .parse()
        .map_err(|_| ServiceError::InvalidInput(format!("invalid payment id: {raw_id}")))
}
