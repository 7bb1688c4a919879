//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::PortError;
use domain_partnership::{PartnershipError, ValidationStatusError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationStatusError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Body of a rejected submission
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<ValidationStatusError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors }))
                    .into_response();
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PartnershipError> for ApiError {
    fn from(err: PartnershipError) -> Self {
        match err {
            PartnershipError::Validation(errors) => ApiError::Validation(errors),
            PartnershipError::InvalidRequest(message) => {
                warn!(error = %message, "Rejected malformed request");
                ApiError::BadRequest(message)
            }
            PartnershipError::ResourceNotFound(id) => {
                warn!(resource = %id, "Resource not linked to transaction");
                ApiError::NotFound(format!("Resource {id} not found"))
            }
            PartnershipError::Port(port) if port.is_not_found() => ApiError::NotFound(port.to_string()),
            PartnershipError::Port(port) => {
                error!(error = %port, "Collaborator failed");
                ApiError::Internal(port.to_string())
            }
            PartnershipError::Service(message) => {
                error!(error = %message, "Service error");
                ApiError::Internal(message)
            }
        }
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        PartnershipError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ApiError::from(PartnershipError::Validation(vec![ValidationStatusError::new(
                    "Surname is required",
                    "data.surname",
                )])),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(PartnershipError::not_found("gp-1")),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(PortError::not_found("Transaction", "txn-1")),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(PartnershipError::invalid_request("Invalid patch: expected a date")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(PartnershipError::service("No strategy found for kind: null")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
