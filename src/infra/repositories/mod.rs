pub mod postgres_booking_repo;
pub mod postgres_experience_repo;
pub mod postgres_promo_repo;
pub mod postgres_slot_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_experience_repo;
pub mod sqlite_promo_repo;
pub mod sqlite_slot_repo;
