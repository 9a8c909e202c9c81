use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable activity listing. Never mutated by the booking flow;
/// the list fields live JSON-encoded in TEXT columns.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub price: f64,
    pub duration: String,
    pub image: String,
    pub rating: f64,
    pub review_count: i64,
    pub highlights_json: String,
    pub included_json: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewExperienceParams {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub price: f64,
    pub duration: String,
    pub image: String,
    pub rating: f64,
    pub review_count: i64,
    pub highlights: Vec<String>,
    pub included: Vec<String>,
}

impl Experience {
    pub fn new(params: NewExperienceParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: params.title,
            description: params.description,
            location: params.location,
            category: params.category,
            price: params.price,
            duration: params.duration,
            image: params.image,
            rating: params.rating,
            review_count: params.review_count,
            highlights_json: serde_json::to_string(&params.highlights).unwrap_or_else(|_| "[]".into()),
            included_json: serde_json::to_string(&params.included).unwrap_or_else(|_| "[]".into()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn highlights(&self) -> Vec<String> {
        serde_json::from_str(&self.highlights_json).unwrap_or_default()
    }

    pub fn included(&self) -> Vec<String> {
        serde_json::from_str(&self.included_json).unwrap_or_default()
    }
}
