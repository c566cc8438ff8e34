use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::observability::STORE_ERRORS_TOTAL;

/// Errors a handler can surface to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Storage failed. Clients only ever see the generic message; the cause is logged.
    #[error("store unavailable")]
    StoreUnavailable(#[source] ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::StoreUnavailable(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::StoreUnavailable(cause) => {
                STORE_ERRORS_TOTAL.inc();
                error!(error = %cause, "coffee store unavailable");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}
