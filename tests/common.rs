use bookit_backend::{
    api::router::create_router,
    config::Config,
    domain::models::{experience::{Experience, NewExperienceParams}, promo_code::PromoCode, slot::Slot},
    state::AppState,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_experience_repo::SqliteExperienceRepo,
        sqlite_promo_repo::SqlitePromoRepo,
        sqlite_slot_repo::SqliteSlotRepo,
    },
};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            experience_repo: Arc::new(SqliteExperienceRepo::new(pool.clone())),
            slot_repo: Arc::new(SqliteSlotRepo::new(pool.clone())),
            promo_repo: Arc::new(SqlitePromoRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    #[allow(dead_code)]
    pub async fn insert_experience(&self, title: &str, category: &str, price: f64) -> Experience {
        self.state.experience_repo.create(&Experience::new(NewExperienceParams {
            title: title.to_string(),
            description: format!("{} description", title),
            location: "Test Location".to_string(),
            category: category.to_string(),
            price,
            duration: "4 hours".to_string(),
            image: "https://example.com/image.jpg".to_string(),
            rating: 4.5,
            review_count: 42,
            highlights: vec!["Highlight one".to_string(), "Highlight two".to_string()],
            included: vec!["Guide".to_string(), "Equipment".to_string()],
        })).await.expect("Failed to insert experience")
    }

    #[allow(dead_code)]
    pub async fn insert_slot(
        &self,
        experience_id: &str,
        date: NaiveDate,
        start_time: &str,
        capacity: i64,
        booked: i64,
        price: f64,
    ) -> Slot {
        let slot = Slot::new(experience_id.to_string(), date, start_time, "12:00", capacity, booked, price);
        self.state.slot_repo.create(&slot).await.expect("Failed to insert slot")
    }

    #[allow(dead_code)]
    pub async fn insert_promo(&self, promo: &PromoCode) -> PromoCode {
        self.state.promo_repo.create(promo).await.expect("Failed to insert promo")
    }

    #[allow(dead_code)]
    pub async fn slot_booked_count(&self, slot_id: &str) -> i64 {
        let slot = self.state.slot_repo.find_by_id(slot_id).await.unwrap().expect("Slot missing");
        slot.booked
    }

    #[allow(dead_code)]
    pub async fn booking_count(&self) -> i64 {
        use sqlx::Row;
        let row = sqlx::query("SELECT COUNT(*) as count FROM bookings")
            .fetch_one(&self.pool).await.unwrap();
        row.get::<i64, _>("count")
    }

    #[allow(dead_code)]
    pub async fn post_json(&self, uri: &str, payload: &Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
