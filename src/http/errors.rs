//! HTTP error taxonomy
//!
//! Every handler failure becomes an `ApiError`; the `IntoResponse` impl logs
//! it and writes `{"error": "<message>"}` with the mapped status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::observability::Event;
use crate::store::StoreError;

use super::response::ErrorBody;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Route handler errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client errors (4xx)
    // ==================
    /// Request body was not valid JSON for the record shape
    #[error("could not parse JSON: {0}")]
    InvalidBody(String),

    /// Path or body identifier is not a valid hex identifier
    #[error("invalid record identifier: {0}")]
    InvalidId(String),

    /// No record with the requested identifier
    #[error("record not found: {0}")]
    NotFound(String),

    // ==================
    // Server errors (5xx)
    // ==================
    /// The record store could not serve the request
    #[error("record store unavailable: {0}")]
    StoreUnavailable(String),

    /// Anything without a more specific mapping
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidId(id) => ApiError::InvalidId(id),
            StoreError::Connection(m) | StoreError::Query(m) => ApiError::StoreUnavailable(m),
            StoreError::Encode(m) => ApiError::Internal(m),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        Event::error("http.error")
            .field("error", &self)
            .field("status", status.as_u16())
            .emit();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidId("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::StoreUnavailable("x".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            ApiError::from(StoreError::InvalidId("z".to_string())),
            ApiError::InvalidId(_)
        ));
        assert!(matches!(
            ApiError::from(StoreError::Connection("refused".to_string())),
            ApiError::StoreUnavailable(_)
        ));
        assert!(matches!(
            ApiError::from(StoreError::Query("timeout".to_string())),
            ApiError::StoreUnavailable(_)
        ));
        assert!(matches!(
            ApiError::from(StoreError::Encode("bad field".to_string())),
            ApiError::Internal(_)
        ));
    }
}
