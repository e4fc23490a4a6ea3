//! # Payment Hex
//!
//! Application service layer and HTTP adapter for the payment records service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (decodes requests, orchestrates storage)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `R: PaymentRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::PaymentService;
