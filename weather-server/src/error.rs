//! API error handling
//!
//! Every failure leaves the service as one of four fixed messages; lookup
//! causes are logged by the gateway and never written to the response.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use weather_core::{ErrorKind, LookupError};

/// Error returned by HTTP handlers.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] LookupError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::UpstreamTimeout => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Response for a handler that panicked, used with `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    tracing::error!(panic = %detail, "Request handler panicked");
    ApiError::from(LookupError::Internal(detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::ProviderError;

    #[test]
    fn status_per_kind() {
        let cases = [
            (LookupError::InvalidInput, StatusCode::BAD_REQUEST),
            (LookupError::from(ProviderError::Status(404)), StatusCode::NOT_FOUND),
            (LookupError::from(ProviderError::Timeout), StatusCode::SERVICE_UNAVAILABLE),
            (LookupError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn panic_maps_to_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
