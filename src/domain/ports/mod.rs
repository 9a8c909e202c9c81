use crate::domain::models::{
    booking::Booking, experience::Experience, promo_code::PromoCode, slot::Slot,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[derive(Debug, Default, Clone)]
pub struct ExperienceFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, experience: &Experience) -> Result<Experience, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, AppError>;
    async fn list(&self, filter: &ExperienceFilter) -> Result<Vec<Experience>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, AppError>;
    /// Slots of one experience with `date >= from`, ordered by (date, start_time).
    async fn list_from_date(&self, experience_id: &str, from: NaiveDate) -> Result<Vec<Slot>, AppError>;
}

#[async_trait]
pub trait PromoCodeRepository: Send + Sync {
    async fn create(&self, promo: &PromoCode) -> Result<PromoCode, AppError>;
    /// Lookup is case-insensitive; implementations canonicalize to uppercase.
    async fn find_by_code(&self, code: &str) -> Result<Option<PromoCode>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// The atomic unit of the booking transaction: increment the slot's
    /// booked counter by `booking.guests` only if the result stays within
    /// capacity, and insert the booking row, both or neither. A lost race
    /// surfaces as `InsufficientAvailability` with the remaining spots read
    /// fresh inside the same transaction.
    async fn reserve_and_create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
}
