//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. The only error a client is
//! expected to act on is [`AppError::NotFound`]; everything else is reported
//! as a generic internal error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Error response body: `{"detail": "...", "code": "...", "details": {...}}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
    code: &'static str,
    details: Value,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { message, details } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let info = self.to_error_info();
        let body = ErrorBody {
            detail: info.message,
            code: info.code,
            details: info.details,
        };

        (status, Json(body)).into_response()
    }
}

/// Storage failures are never surfaced in detail; a primary-key collision on
/// `urls.short_id` ends up here as well.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            tracing::error!(error = %db, "Unique constraint violation");
        } else {
            tracing::error!(error = %e, "Database error");
        }

        AppError::internal("Database error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::not_found("Item not found", json!({ "id": 7 }));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Item not found");

        let info = err.to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.details["id"], 7);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = AppError::internal("Database error", json!({}));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_error_info().code, "internal_error");
    }

    #[test]
    fn test_sqlx_error_becomes_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Database error");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("URL not found", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_into_response_body_has_detail() {
        let response =
            AppError::not_found("Item not found", json!({ "id": 5 })).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            json!({ "detail": "Item not found", "code": "not_found", "details": { "id": 5 } })
        );
    }
}
