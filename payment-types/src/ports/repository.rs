//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite, InMemory) will implement this trait.

use crate::domain::{Payment, PaymentId};
use crate::dto::{CreatePaymentRequest, UpdatePaymentRequest};
use crate::error::RepoError;

/// The main repository port for payment record storage.
///
/// Absent records are reported as `Ok(None)` (or an affected count of zero
/// for `delete`), never as an error. Duplicate card numbers on insert are a
/// `RepoError::Conflict`.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Inserts a new payment record and returns it with its assigned id.
    async fn insert(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError>;

    /// Finds a payment record by id.
    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, RepoError>;

    /// Applies the given changes; `None` if no record has that id.
    async fn update(&self, req: UpdatePaymentRequest) -> Result<Option<Payment>, RepoError>;

    /// Lists all payment records.
    async fn list(&self) -> Result<Vec<Payment>, RepoError>;

    /// Deletes a payment record, returning the number of rows affected.
    async fn delete(&self, id: PaymentId) -> Result<u64, RepoError>;
}
