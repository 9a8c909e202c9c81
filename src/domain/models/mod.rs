pub mod booking;
pub mod experience;
pub mod promo_code;
pub mod slot;
