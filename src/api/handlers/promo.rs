use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::ValidatePromoRequest;
use crate::api::dtos::responses::PromoAppliedResponse;
use crate::domain::models::promo_code::PROMO_KIND_PERCENTAGE;
use crate::domain::services::promo::{self, PromoRejection};
use crate::error::{AppError, FieldError};
use crate::state::AppState;

/// Preview evaluation for the checkout form. Runs the same evaluator as the
/// booking transaction, so a previewed quote and a committed booking agree
/// for identical inputs at the same instant.
pub async fn validate_promo(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidatePromoRequest>,
) -> Result<Response, AppError> {
    let mut errors = Vec::new();
    if payload.code.trim().is_empty() {
        errors.push(FieldError::new("code", "Promo code is required"));
    }
    if payload.amount <= 0.0 {
        errors.push(FieldError::new("amount", "Amount must be positive"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let row = state.promo_repo.find_by_code(&payload.code).await?;

    match promo::evaluate(row.as_ref(), payload.amount, Utc::now()) {
        Ok(quote) => {
            // The lookup succeeded, so the row is present here.
            let promo = row.ok_or(AppError::Internal)?;
            info!("validate_promo: {} applied to amount {}", promo.code, payload.amount);

            let message = if promo.kind == PROMO_KIND_PERCENTAGE {
                format!("{}% off applied!", promo.value)
            } else {
                format!("${} discount applied!", promo.value)
            };

            Ok(Json(PromoAppliedResponse {
                valid: true,
                code: promo.code,
                kind: promo.kind,
                value: promo.value,
                discount: quote.discount,
                final_amount: quote.final_amount,
                message,
            }).into_response())
        }
        Err(rejection) => {
            let status = match rejection {
                PromoRejection::InvalidCode => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            };
            Ok((status, Json(json!({
                "valid": false,
                "error": rejection.to_string(),
            }))).into_response())
        }
    }
}
