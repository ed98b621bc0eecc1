//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use geocache_core::error::GeocodingError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: code.into(),
        }
    }

    /// Nothing found for the request.
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, "NO_DATA")
    }

    /// Request could not be answered with the given inputs.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "INVALID_INPUT")
    }

    /// Upstream provider failed.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message, "PROVIDER_ERROR")
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_ERROR")
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<GeocodingError> for ApiError {
    fn from(err: GeocodingError) -> Self {
        match &err {
            GeocodingError::NoData(_) => ApiError::no_data(err.to_string()),
            GeocodingError::InvalidInput(_) => ApiError::invalid_input(err.to_string()),
            GeocodingError::ProviderStatus { .. }
            | GeocodingError::Http(_)
            | GeocodingError::Json(_) => {
                tracing::warn!(error = %err, recoverable = err.is_recoverable(), "Provider error");
                ApiError::provider(err.to_string())
            }
            GeocodingError::ConfigError(_) => {
                tracing::error!(error = %err, "Internal error");
                ApiError::internal("An internal error occurred")
            }
        }
    }
}
