//! Domain models for the payment records service.

pub mod payment;

pub use payment::{Payment, PaymentId, validate_number_card};
