use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::ExperienceListQuery;
use crate::api::dtos::responses::{group_slots_by_date, ExperienceDetailResponse, ExperienceResponse};
use crate::domain::ports::ExperienceFilter;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_experiences(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExperienceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ExperienceFilter {
        category: query.category,
        min_price: query.min_price,
        max_price: query.max_price,
        search: query.search,
    };

    let experiences = state.experience_repo.list(&filter).await?;
    info!("list_experiences: {} results", experiences.len());

    let body: Vec<ExperienceResponse> = experiences.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

pub async fn get_experience(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state.experience_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    let today = Utc::now().date_naive();
    let slots = state.slot_repo.list_from_date(&experience.id, today).await?;

    Ok(Json(ExperienceDetailResponse {
        experience: experience.into(),
        slots_by_date: group_slots_by_date(slots),
    }))
}
