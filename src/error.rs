use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::services::promo::PromoRejection;

/// One entry of a validation failure report, keyed by the offending
/// request field. Mirrors the `details` array the client expects.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("Not enough availability. Only {remaining} spots remaining.")]
    InsufficientAvailability { remaining: i64 },
    #[error("{0}")]
    PromoRejected(PromoRejection),
    #[error("Booking conflicted with a concurrent request, please retry")]
    TransactionConflict,
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();

                    // 2067 = SQLite Unique Constraint
                    // 23505 = PostgreSQL Unique Violation
                    if code == "2067" || code == "23505" {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({ "error": "Resource already exists (duplicate entry)" }))
                        ).into_response();
                    }

                    // 5 = SQLITE_BUSY, 40001 = PostgreSQL serialization failure
                    if code == "5" || code == "40001" {
                        return AppError::TransactionConflict.into_response();
                    }
                }

                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(details) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Validation failed",
                        "details": details,
                    })),
                ).into_response();
            }
            AppError::InsufficientAvailability { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::PromoRejected(reason) => (StatusCode::BAD_REQUEST, reason.to_string()),
            AppError::TransactionConflict => (StatusCode::CONFLICT, self.to_string()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
