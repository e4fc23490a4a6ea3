//! HTTP request handlers.
//!
//! Each handler decodes the inbound request, delegates to the payment
//! service, and maps the outcome onto a status code. The service reports
//! absent records as `Ok(None)` (or an affected count of zero), which is a
//! separate branch from the error path and must stay that way.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use payment_types::{PaymentRepository, ServiceError};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository> {
    pub service: PaymentService<R>,
}

/// Uniform error envelope shared by every non-200 response.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Writes a 200 response wrapping the value directly.
fn write_ok<T: Serialize>(value: T) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

/// Writes an error response with the uniform `{ "message": ... }` envelope.
fn write_error(message: impl Into<String>, status: StatusCode) -> Response {
    (
        status,
        Json(ErrorBody {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Shared responder for errors no handler branch recognizes.
///
/// Logs the underlying error and answers with a generic 500; the error
/// detail never reaches the client.
fn service_error(err: &ServiceError) -> Response {
    tracing::error!(error = %err, "unhandled service error");
    write_error("internal server error", StatusCode::INTERNAL_SERVER_ERROR)
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create a payment record from a raw JSON body.
#[tracing::instrument(skip(state, body))]
pub async fn create<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Bytes,
) -> Response {
    tracing::debug!("payment create request received");

    match state.service.create(&body).await {
        Ok(payment) => {
            tracing::info!(number_card = %payment.number_card, "payment record created");
            write_ok(payment)
        }
        Err(err @ (ServiceError::InvalidInput(_) | ServiceError::AlreadyExists(_))) => {
            tracing::error!(error = %err, "payment create rejected");
            write_error(err.to_string(), StatusCode::BAD_REQUEST)
        }
        Err(err) => service_error(&err),
    }
}

/// Fetch a payment record by its path id.
#[tracing::instrument(skip(state), fields(payment_id = %payment_id))]
pub async fn get_by_id<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(payment_id): Path<String>,
) -> Response {
    tracing::debug!("payment lookup request received");

    match state.service.get_by_id(&payment_id).await {
        Ok(Some(payment)) => {
            tracing::info!(number_card = %payment.number_card, "payment record found");
            write_ok(payment)
        }
        Ok(None) => {
            tracing::warn!("no payment record for given id");
            write_error("no record found for given id", StatusCode::BAD_REQUEST)
        }
        Err(ServiceError::InvalidInput(_)) => {
            write_error("id must be numeric", StatusCode::BAD_REQUEST)
        }
        Err(err) => service_error(&err),
    }
}

// TODO: the record id still travels in the body; move it to the route path
// once clients stop sending it there (changes the external contract).
/// Update a payment record from a raw JSON body.
#[tracing::instrument(skip(state, body))]
pub async fn update<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Bytes,
) -> Response {
    tracing::debug!("payment update request received");

    match state.service.update(&body).await {
        Ok(Some(payment)) => {
            tracing::info!(id = %payment.id, "payment record updated");
            write_ok(payment)
        }
        Ok(None) => {
            tracing::warn!("no payment record for given id");
            write_error("no record found for given id", StatusCode::BAD_REQUEST)
        }
        Err(err @ ServiceError::InvalidInput(_)) => {
            tracing::error!(error = %err, "payment update rejected");
            write_error(err.to_string(), StatusCode::BAD_REQUEST)
        }
        Err(err) => service_error(&err),
    }
}

/// List all payment records.
#[tracing::instrument(skip(state))]
pub async fn list<R: PaymentRepository>(State(state): State<Arc<AppState<R>>>) -> Response {
    tracing::debug!("payment list request received");

    match state.service.list().await {
        Ok(payments) => {
            tracing::info!(count = payments.len(), "payment records listed");
            write_ok(payments)
        }
        Err(err) => service_error(&err),
    }
}

/// Delete a payment record by its path id, echoing the id back.
#[tracing::instrument(skip(state), fields(payment_id = %payment_id))]
pub async fn delete<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(payment_id): Path<String>,
) -> Response {
    tracing::debug!("payment delete request received");

    match state.service.delete(&payment_id).await {
        Ok(0) => {
            tracing::error!("no payment record deleted");
            write_error("record not found", StatusCode::BAD_REQUEST)
        }
        Ok(_) => {
            tracing::info!("payment record deleted");
            write_ok(payment_id)
        }
        Err(err) => service_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn service_error_hides_detail_behind_500() {
        let response = service_error(&ServiceError::Internal("pool exhausted".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "internal server error");
    }

    #[tokio::test]
    async fn write_error_uses_message_envelope() {
        let response = write_error("record not found", StatusCode::BAD_REQUEST);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "record not found");
    }
}
