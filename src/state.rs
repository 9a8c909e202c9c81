use std::sync::Arc;
use crate::domain::ports::{
    BookingRepository, ExperienceRepository, PromoCodeRepository, SlotRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub experience_repo: Arc<dyn ExperienceRepository>,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub promo_repo: Arc<dyn PromoCodeRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
}
