//! # Payment Types
//!
//! The IO-free core of the payment records service: the `Payment` entity,
//! the request DTOs that cross the HTTP boundary, the layered error enums,
//! and the repository port that storage adapters plug into. Everything else
//! in the workspace depends on this crate; it depends on nothing but data.
//!
//! ## Layout
//!
//! - `domain/` - the `Payment` entity and its numeric identifier
//! - `dto/` - request bodies accepted by the HTTP adapter
//! - `error/` - `RepoError` (storage) and `ServiceError` (service boundary)
//! - `ports/` - the `PaymentRepository` trait

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Payment, PaymentId};
pub use dto::*;
pub use error::{RepoError, ServiceError};
pub use ports::PaymentRepository;
