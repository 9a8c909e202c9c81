mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_list_all_experiences_newest_first() {
    let app = TestApp::new().await;
    app.insert_experience("Older Tour", "Cultural", 149.0).await;
    // created_at ordering needs distinct timestamps
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    app.insert_experience("Newer Safari", "Adventure", 299.0).await;

    let res = app.get("/api/experiences").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["title"], json!("Newer Safari"));
    assert_eq!(list[1]["title"], json!("Older Tour"));
    assert!(list[0]["highlights"].is_array());
    assert!(list[0]["included"].is_array());
}

#[tokio::test]
async fn test_filter_by_category() {
    let app = TestApp::new().await;
    app.insert_experience("Safari", "Adventure", 299.0).await;
    app.insert_experience("Museum Walk", "Cultural", 149.0).await;

    let res = app.get("/api/experiences?category=Cultural").await;
    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], json!("Museum Walk"));
}

#[tokio::test]
async fn test_filter_by_price_bounds() {
    let app = TestApp::new().await;
    app.insert_experience("Cheap Walk", "Hiking", 99.0).await;
    app.insert_experience("Mid Safari", "Adventure", 299.0).await;
    app.insert_experience("Lux Cruise", "Water", 1299.0).await;

    let res = app.get("/api/experiences?minPrice=100&maxPrice=500").await;
    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], json!("Mid Safari"));
}

#[tokio::test]
async fn test_search_is_case_insensitive_across_fields() {
    let app = TestApp::new().await;
    app.insert_experience("Desert Safari", "Adventure", 299.0).await;
    app.insert_experience("Yacht Cruise", "Water", 1299.0).await;

    let res = app.get("/api/experiences?search=desert").await;
    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], json!("Desert Safari"));
}

#[tokio::test]
async fn test_detail_groups_future_slots_by_date_with_derived_fields() {
    let app = TestApp::new().await;
    let exp = app.insert_experience("Safari", "Adventure", 299.0).await;

    let today = Utc::now().date_naive();
    let tomorrow = today + Duration::days(1);
    let yesterday = today - Duration::days(1);

    app.insert_slot(&exp.id, tomorrow, "08:00", 10, 3, 299.0).await;
    app.insert_slot(&exp.id, tomorrow, "14:00", 10, 10, 299.0).await;
    app.insert_slot(&exp.id, today, "08:00", 8, 0, 299.0).await;
    // Past slots stay out of the listing.
    app.insert_slot(&exp.id, yesterday, "08:00", 10, 5, 299.0).await;

    let res = app.get(&format!("/api/experiences/{}", exp.id)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["title"], json!("Safari"));

    let by_date = body["slotsByDate"].as_object().unwrap();
    assert_eq!(by_date.len(), 2);

    let today_key = today.format("%Y-%m-%d").to_string();
    let tomorrow_key = tomorrow.format("%Y-%m-%d").to_string();
    assert!(by_date.contains_key(&today_key));
    assert!(by_date.contains_key(&tomorrow_key));

    let tomorrow_slots = by_date[&tomorrow_key].as_array().unwrap();
    assert_eq!(tomorrow_slots.len(), 2);
    // ordered by start_time within the day
    assert_eq!(tomorrow_slots[0]["startTime"], json!("08:00"));
    assert_eq!(tomorrow_slots[0]["available"], json!(7));
    assert_eq!(tomorrow_slots[0]["isFull"], json!(false));
    assert_eq!(tomorrow_slots[1]["startTime"], json!("14:00"));
    assert_eq!(tomorrow_slots[1]["available"], json!(0));
    assert_eq!(tomorrow_slots[1]["isFull"], json!(true));
}

#[tokio::test]
async fn test_detail_unknown_experience_returns_404() {
    let app = TestApp::new().await;
    let res = app.get(&format!("/api/experiences/{}", Uuid::new_v4())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("Experience not found"));
}
