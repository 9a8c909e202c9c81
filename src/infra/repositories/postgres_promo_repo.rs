use crate::domain::{models::promo_code::PromoCode, ports::PromoCodeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPromoRepo {
    pool: PgPool,
}

impl PostgresPromoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromoCodeRepository for PostgresPromoRepo {
    async fn create(&self, promo: &PromoCode) -> Result<PromoCode, AppError> {
        sqlx::query_as::<_, PromoCode>(
            "INSERT INTO promo_codes (code, kind, value, min_amount, max_discount, expires_at, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&promo.code)
            .bind(&promo.kind)
            .bind(promo.value)
            .bind(promo.min_amount)
            .bind(promo.max_discount)
            .bind(promo.expires_at)
            .bind(promo.is_active)
            .bind(promo.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<PromoCode>, AppError> {
        sqlx::query_as::<_, PromoCode>("SELECT * FROM promo_codes WHERE code = $1")
            .bind(code.to_uppercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
