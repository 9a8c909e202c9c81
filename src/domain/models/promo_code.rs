use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A pricing-adjustment rule keyed by its uppercase code. Immutable once a
/// booking references it: the applied discount is captured on the Booking
/// row, so later promo edits never touch historical bookings.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PromoCode {
    pub code: String,
    pub kind: String,
    pub value: f64,
    pub min_amount: f64,
    pub max_discount: Option<f64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

pub const PROMO_KIND_PERCENTAGE: &str = "percentage";
pub const PROMO_KIND_FLAT: &str = "flat";

impl PromoCode {
    pub fn new(
        code: &str,
        kind: &str,
        value: f64,
        min_amount: f64,
        max_discount: Option<f64>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code: code.to_uppercase(),
            kind: kind.to_string(),
            value,
            min_amount,
            max_discount,
            expires_at,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
