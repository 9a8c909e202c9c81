use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{SqlitePool, Row};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn reserve_and_create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Compare-and-increment: only commits if the counter stays within
        // capacity, so concurrent requests cannot jointly overbook.
        let result = sqlx::query(
            "UPDATE slots SET booked = booked + ? WHERE id = ? AND booked + ? <= capacity"
        )
            .bind(booking.guests).bind(&booking.slot_id).bind(booking.guests)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            let row = sqlx::query("SELECT capacity - booked AS remaining FROM slots WHERE id = ?")
                .bind(&booking.slot_id)
                .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;
            let remaining = row.map(|r| r.get::<i64, _>("remaining")).unwrap_or(0);
            return Err(AppError::InsufficientAvailability { remaining });
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, experience_id, slot_id, name, email, phone, guests, total_price, discount, promo_code, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
}
