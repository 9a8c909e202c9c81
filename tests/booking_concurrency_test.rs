mod common;

use bookit_backend::domain::models::booking::{Booking, NewBookingParams};
use bookit_backend::error::AppError;
use chrono::{Duration, Utc};
use common::TestApp;
use tokio::task::JoinSet;

fn booking_for(experience_id: &str, slot_id: &str, guests: i64, price_per_guest: f64) -> Booking {
    Booking::new(NewBookingParams {
        experience_id: experience_id.to_string(),
        slot_id: slot_id.to_string(),
        name: "Race Tester".to_string(),
        email: "race@example.com".to_string(),
        phone: "0501234567".to_string(),
        guests,
        total_price: price_per_guest * guests as f64,
        discount: 0.0,
        promo_code: None,
    })
}

#[tokio::test]
async fn test_two_concurrent_reservations_cannot_jointly_overbook() {
    let app = TestApp::new().await;
    let exp = app.insert_experience("Safari", "Adventure", 100.0).await;
    let date = Utc::now().date_naive() + Duration::days(1);
    let slot = app.insert_slot(&exp.id, date, "08:00", 10, 0, 100.0).await;

    // Two requests of 6 guests against capacity 10: at most one may commit.
    let mut set = JoinSet::new();
    for _ in 0..2 {
        let repo = app.state.booking_repo.clone();
        let booking = booking_for(&exp.id, &slot.id, 6, 100.0);
        set.spawn(async move { repo.reserve_and_create(&booking).await });
    }

    let mut successes = 0;
    let mut losers = Vec::new();
    while let Some(res) = set.join_next().await {
        match res.unwrap() {
            Ok(_) => successes += 1,
            Err(e) => losers.push(e),
        }
    }

    assert_eq!(successes, 1, "exactly one of the racing requests may win");
    assert_eq!(losers.len(), 1);
    match &losers[0] {
        AppError::InsufficientAvailability { remaining } => {
            assert_eq!(*remaining, 4, "loser sees availability as if freshly checked");
        }
        other => panic!("expected InsufficientAvailability, got {:?}", other),
    }

    assert_eq!(app.slot_booked_count(&slot.id).await, 6);
    assert_eq!(app.booking_count().await, 1);
}

#[tokio::test]
async fn test_saturating_concurrent_reservations_never_exceed_capacity() {
    let app = TestApp::new().await;
    let exp = app.insert_experience("Safari", "Adventure", 100.0).await;
    let date = Utc::now().date_naive() + Duration::days(1);
    let slot = app.insert_slot(&exp.id, date, "08:00", 10, 0, 100.0).await;

    // 20 workers of 3 guests each want 60 spots; only 10 exist.
    let worker_count = 20;
    let guests_per_worker: i64 = 3;

    let mut set = JoinSet::new();
    for _ in 0..worker_count {
        let repo = app.state.booking_repo.clone();
        let booking = booking_for(&exp.id, &slot.id, guests_per_worker, 100.0);
        set.spawn(async move { repo.reserve_and_create(&booking).await });
    }

    let mut wins: i64 = 0;
    while let Some(res) = set.join_next().await {
        match res.unwrap() {
            Ok(_) => wins += 1,
            Err(AppError::InsufficientAvailability { remaining }) => {
                assert!((0..=10).contains(&remaining));
            }
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    let booked = app.slot_booked_count(&slot.id).await;
    assert!(booked <= 10, "booked {} exceeds capacity", booked);
    assert_eq!(booked, wins * guests_per_worker);
    assert_eq!(app.booking_count().await, wins);
    assert_eq!(wins, 3, "three reservations of 3 fit into capacity 10");
}
