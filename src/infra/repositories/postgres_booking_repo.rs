use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn reserve_and_create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Compare-and-increment; the row lock taken by the UPDATE serializes
        // concurrent reservations against the same slot.
        let result = sqlx::query(
            "UPDATE slots SET booked = booked + $1 WHERE id = $2 AND booked + $1 <= capacity"
        )
            .bind(booking.guests).bind(&booking.slot_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            let row = sqlx::query("SELECT capacity - booked AS remaining FROM slots WHERE id = $1")
                .bind(&booking.slot_id)
                .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;
            let remaining = row.map(|r| r.get::<i64, _>("remaining")).unwrap_or(0);
            return Err(AppError::InsufficientAvailability { remaining });
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, experience_id, slot_id, name, email, phone, guests, total_price, discount, promo_code, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.experience_id).bind(&booking.slot_id)
            .bind(&booking.name).bind(&booking.email).bind(&booking.phone)
            .bind(booking.guests).bind(booking.total_price).bind(booking.discount)
            .bind(&booking.promo_code).bind(&booking.status).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
}
