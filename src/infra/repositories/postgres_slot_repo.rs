use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresSlotRepo {
    pool: PgPool,
}

impl PostgresSlotRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PostgresSlotRepo {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>(
            "INSERT INTO slots (id, experience_id, date, start_time, end_time, capacity, booked, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&slot.id)
            .bind(&slot.experience_id)
            .bind(slot.date)
            .bind(&slot.start_time)
            .bind(&slot.end_time)
            .bind(slot.capacity)
            .bind(slot.booked)
            .bind(slot.price)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_from_date(&self, experience_id: &str, from: NaiveDate) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>(
            "SELECT * FROM slots WHERE experience_id = $1 AND date >= $2 ORDER BY date ASC, start_time ASC"
        )
            .bind(experience_id)
            .bind(from)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
