use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{booking::Booking, experience::Experience, slot::Slot};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
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
    pub highlights: Vec<String>,
    pub included: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Experience> for ExperienceResponse {
    fn from(exp: Experience) -> Self {
        let highlights = exp.highlights();
        let included = exp.included();
        Self {
            id: exp.id,
            title: exp.title,
            description: exp.description,
            location: exp.location,
            category: exp.category,
            price: exp.price,
            duration: exp.duration,
            image: exp.image,
            rating: exp.rating,
            review_count: exp.review_count,
            highlights,
            included,
            created_at: exp.created_at,
            updated_at: exp.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub id: String,
    pub experience_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i64,
    pub booked: i64,
    pub available: i64,
    pub is_full: bool,
    pub price: f64,
}

impl From<Slot> for SlotResponse {
    fn from(slot: Slot) -> Self {
        let available = slot.available();
        let is_full = slot.is_full();
        Self {
            id: slot.id,
            experience_id: slot.experience_id,
            date: slot.date.format("%Y-%m-%d").to_string(),
            start_time: slot.start_time,
            end_time: slot.end_time,
            capacity: slot.capacity,
            booked: slot.booked,
            available,
            is_full,
            price: slot.price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDetailResponse {
    #[serde(flatten)]
    pub experience: ExperienceResponse,
    pub slots_by_date: BTreeMap<String, Vec<SlotResponse>>,
}

/// Groups future slots under their "YYYY-MM-DD" date key; BTreeMap keeps the
/// dates in calendar order on the wire.
pub fn group_slots_by_date(slots: Vec<Slot>) -> BTreeMap<String, Vec<SlotResponse>> {
    let mut grouped: BTreeMap<String, Vec<SlotResponse>> = BTreeMap::new();
    for slot in slots {
        let key = slot.date.format("%Y-%m-%d").to_string();
        grouped.entry(key).or_default().push(slot.into());
    }
    grouped
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: String,
    pub experience_title: String,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub total_price: f64,
    pub discount: f64,
    pub status: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct BookingCreatedResponse {
    pub success: bool,
    pub booking: BookingSummary,
}

impl BookingCreatedResponse {
    pub fn new(booking: &Booking, experience_title: &str, slot: &Slot) -> Self {
        Self {
            success: true,
            booking: BookingSummary {
                id: booking.id.clone(),
                experience_title: experience_title.to_string(),
                date: slot.date.format("%Y-%m-%d").to_string(),
                time: format!("{} - {}", slot.start_time, slot.end_time),
                guests: booking.guests,
                total_price: booking.total_price,
                discount: booking.discount,
                status: booking.status.clone(),
                name: booking.name.clone(),
                email: booking.email.clone(),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailResponse {
    pub id: String,
    pub experience_title: String,
    pub experience_image: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub total_price: f64,
    pub discount: f64,
    pub promo_code: Option<String>,
    pub status: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoAppliedResponse {
    pub valid: bool,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub discount: f64,
    pub final_amount: f64,
    pub message: String,
}
