use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

/// One date/time occurrence of an Experience with finite capacity.
/// `start_time`/`end_time` are wall-clock "HH:MM" display strings.
/// Invariant after every committed booking: 0 <= booked <= capacity.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Slot {
    pub id: String,
    pub experience_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i64,
    pub booked: i64,
    pub price: f64,
}

impl Slot {
    pub fn new(
        experience_id: String,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        capacity: i64,
        booked: i64,
        price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            experience_id,
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            capacity,
            booked,
            price,
        }
    }

    // Derived at read time, never stored.
    pub fn available(&self) -> i64 {
        self.capacity - self.booked
    }

    pub fn is_full(&self) -> bool {
        self.booked >= self.capacity
    }
}
