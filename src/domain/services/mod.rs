pub mod promo;
pub mod validation;
