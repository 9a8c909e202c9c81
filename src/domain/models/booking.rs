use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A confirmed reservation against one Slot for N guests. Created exactly
/// once per successful transaction and never mutated or deleted; its
/// existence never implicitly decrements the slot counter.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub experience_id: String,
    pub slot_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: i64,
    pub total_price: f64,
    pub discount: f64,
    pub promo_code: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub experience_id: String,
    pub slot_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: i64,
    pub total_price: f64,
    pub discount: f64,
    pub promo_code: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            experience_id: params.experience_id,
            slot_id: params.slot_id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            guests: params.guests,
            total_price: params.total_price,
            discount: params.discount,
            promo_code: params.promo_code.map(|c| c.to_uppercase()),
            status: "confirmed".to_string(),
            created_at: Utc::now(),
        }
    }
}
