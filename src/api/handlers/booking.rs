use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::CreateBookingRequest;
use crate::api::dtos::responses::{BookingCreatedResponse, BookingDetailResponse};
use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::services::promo;
use crate::domain::services::validation::validate_booking_request;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Input checks come before any store access.
    let errors = validate_booking_request(
        &payload.experience_id,
        &payload.slot_id,
        &payload.name,
        &payload.email,
        &payload.phone,
        payload.guests,
    );
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let experience = state.experience_repo.find_by_id(&payload.experience_id).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    let slot = state.slot_repo.find_by_id(&payload.slot_id).await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;

    // Fast pre-check for a friendly error; the conditional increment in the
    // repository is the actual guard against concurrent overbooking.
    let available = slot.available();
    if available < payload.guests {
        return Err(AppError::InsufficientAvailability { remaining: available });
    }

    let subtotal = slot.price * payload.guests as f64;

    // A supplied-but-rejected promo code aborts the whole booking; it is
    // never silently dropped. The persisted amounts are the quote's own
    // rounded figures, so a committed booking always matches the preview.
    let (discount, total_price) = match &payload.promo_code {
        Some(code) => {
            let row = state.promo_repo.find_by_code(code).await?;
            let quote = promo::evaluate(row.as_ref(), subtotal, Utc::now())
                .map_err(AppError::PromoRejected)?;
            (quote.discount, quote.final_amount)
        }
        None => (0.0, promo::round_cents(subtotal)),
    };

    let booking = Booking::new(NewBookingParams {
        experience_id: payload.experience_id,
        slot_id: payload.slot_id,
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        guests: payload.guests,
        total_price,
        discount,
        promo_code: payload.promo_code,
    });

    let created = match state.booking_repo.reserve_and_create(&booking).await {
        Ok(created) => created,
        Err(e) => {
            if let AppError::InsufficientAvailability { remaining } = &e {
                warn!("create_booking: lost capacity race on slot {} ({} remaining)", slot.id, remaining);
            }
            return Err(e);
        }
    };

    info!(
        "create_booking: booking {} confirmed for {} guest(s) on slot {}",
        created.id, created.guests, created.slot_id
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse::new(&created, &experience.title, &slot)),
    ))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let experience = state.experience_repo.find_by_id(&booking.experience_id).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    let slot = state.slot_repo.find_by_id(&booking.slot_id).await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;

    Ok(Json(BookingDetailResponse {
        id: booking.id,
        experience_title: experience.title,
        experience_image: experience.image,
        location: experience.location,
        date: slot.date.format("%Y-%m-%d").to_string(),
        time: format!("{} - {}", slot.start_time, slot.end_time),
        guests: booking.guests,
        total_price: booking.total_price,
        discount: booking.discount,
        promo_code: booking.promo_code,
        status: booking.status,
        name: booking.name,
        email: booking.email,
        phone: booking.phone,
        created_at: booking.created_at,
    }))
}
