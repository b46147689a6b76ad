//! Request-scoped errors and their HTTP representation.
//!
//! Every failure is returned to the client as `{"error": "<message>"}`.
//! Client-side failures are served with `200 OK`; clients distinguish outcomes
//! by the body alone.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::url_validator::InvalidUrlError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing `url`, or any validation step failed.
    #[error("invalid url")]
    InvalidUrl,

    /// Identifier segment is not made of decimal digits only.
    #[error("Wrong format")]
    WrongFormat,

    /// Well-formed identifier with no registered entry.
    #[error("No short URL found for the given input")]
    NotFound,

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status used for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::WrongFormat | AppError::NotFound => StatusCode::OK,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<InvalidUrlError> for AppError {
    fn from(_: InvalidUrlError) -> Self {
        AppError::InvalidUrl
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::InvalidUrl
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let AppError::Internal { message } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_url_body() {
        let (status, body) = body_json(AppError::InvalidUrl).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "invalid url" }));
    }

    #[tokio::test]
    async fn test_wrong_format_body() {
        let (status, body) = body_json(AppError::WrongFormat).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Wrong format" }));
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_json(AppError::NotFound).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "error": "No short URL found for the given input" })
        );
    }

    #[tokio::test]
    async fn test_internal_is_server_error() {
        let (status, body) = body_json(AppError::internal("boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "boom" }));
    }

    #[test]
    fn test_every_validation_failure_collapses() {
        let err: AppError = InvalidUrlError::Pattern.into();
        assert!(matches!(err, AppError::InvalidUrl));

        let err: AppError = InvalidUrlError::Timeout.into();
        assert!(matches!(err, AppError::InvalidUrl));
    }
}
