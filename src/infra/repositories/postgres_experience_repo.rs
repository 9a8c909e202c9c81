use crate::domain::{models::experience::Experience, ports::{ExperienceFilter, ExperienceRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

pub struct PostgresExperienceRepo {
    pool: PgPool,
}

impl PostgresExperienceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceRepository for PostgresExperienceRepo {
    async fn create(&self, experience: &Experience) -> Result<Experience, AppError> {
        sqlx::query_as::<_, Experience>(
            r#"INSERT INTO experiences (
                id, title, description, location, category, price, duration,
                image, rating, review_count, highlights_json, included_json,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *"#
        )
            .bind(&experience.id)
            .bind(&experience.title)
            .bind(&experience.description)
            .bind(&experience.location)
            .bind(&experience.category)
            .bind(experience.price)
            .bind(&experience.duration)
            .bind(&experience.image)
            .bind(experience.rating)
            .bind(experience.review_count)
            .bind(&experience.highlights_json)
            .bind(&experience.included_json)
            .bind(experience.created_at)
            .bind(experience.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, AppError> {
        sqlx::query_as::<_, Experience>("SELECT * FROM experiences WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, filter: &ExperienceFilter) -> Result<Vec<Experience>, AppError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM experiences WHERE 1=1");

        if let Some(category) = &filter.category {
            qb.push(" AND category = ").push_bind(category);
        }
        if let Some(min_price) = filter.min_price {
            qb.push(" AND price >= ").push_bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            qb.push(" AND price <= ").push_bind(max_price);
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            qb.push(" AND (title ILIKE ").push_bind(pattern.clone());
            qb.push(" OR description ILIKE ").push_bind(pattern.clone());
            qb.push(" OR location ILIKE ").push_bind(pattern);
            qb.push(")");
        }

        qb.push(" ORDER BY created_at DESC");

        qb.build_query_as::<Experience>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM experiences")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }
}
