use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::protocol::{ErrorResponse, FaultResponse, NotFoundResponse};

pub const FAULT_ERROR: &str = "Something went wrong!";
pub const FAULT_GENERIC_MESSAGE: &str = "Internal server error";

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Message is required")]
    MissingMessage,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Endpoint not found")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// Detail of an unhandled fault, attached to the 500 response so the fault
/// middleware can log it and decide how much to reveal.
#[derive(Debug, Clone)]
pub struct Fault(pub String);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingMessage | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound(path) => (
                status,
                Json(NotFoundResponse {
                    error: "Endpoint not found".to_string(),
                    path,
                }),
            )
                .into_response(),
            // Generic body by default; the fault middleware swaps in the
            // detail outside production.
            ApiError::Internal(detail) => {
                let mut response = (status, Json(fault_body(false, &detail))).into_response();
                response.extensions_mut().insert(Fault(detail));
                response
            }
            other => (
                status,
                Json(ErrorResponse {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Build the 500 body, revealing `detail` only when `verbose` is set.
pub fn fault_body(verbose: bool, detail: &str) -> FaultResponse {
    FaultResponse {
        error: FAULT_ERROR.to_string(),
        message: if verbose {
            detail.to_string()
        } else {
            FAULT_GENERIC_MESSAGE.to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::MissingMessage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PayloadTooLarge("big".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::NotFound("/x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_carries_fault_detail() {
        let response = ApiError::Internal("db exploded".into()).into_response();
        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.0, "db exploded");
    }

    #[test]
    fn test_fault_body_hides_detail_unless_verbose() {
        assert_eq!(fault_body(true, "boom").message, "boom");
        assert_eq!(fault_body(false, "boom").message, FAULT_GENERIC_MESSAGE);
        assert_eq!(fault_body(false, "boom").error, FAULT_ERROR);
    }
}
