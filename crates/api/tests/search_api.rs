//! Integration tests for the full-text search endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_public_event, seed_user, seed_year};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_requires_terms(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing search terms");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_finds_events_by_title(pool: PgPool) {
    let year = seed_year(&pool, "2012").await;
    let user = seed_user(&pool, "burner", true).await;
    seed_public_event(&pool, year.id, user.id, "Sunrise Yoga").await;
    seed_public_event(&pool, year.id, user.id, "Fire Conclave").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=yoga").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let hits = json["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Sunrise Yoga");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_year_scoping_and_the_all_escape(pool: PgPool) {
    let year_a = seed_year(&pool, "2011").await;
    let year_b = seed_year(&pool, "2012").await;
    let user = seed_user(&pool, "burner", true).await;
    seed_public_event(&pool, year_a.id, user.id, "Yoga Eleven").await;
    seed_public_event(&pool, year_b.id, user.id, "Yoga Twelve").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/search?q=yoga&year=2012").await;
    let json = body_json(response).await;
    let hits = json["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Yoga Twelve");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/search?q=yoga&year=all").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // An unknown year label is a 404, not an empty result.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/search?q=yoga&year=2099").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
