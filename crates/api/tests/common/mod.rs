//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so the
//! tests exercise the same middleware stack (CORS, request ID, timeout,
//! tracing, panic recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use playa_api::auth::jwt::{generate_access_token, JwtConfig};
use playa_api::config::ServerConfig;
use playa_api::routes;
use playa_api::state::AppState;
use playa_core::types::{DbId, Timestamp};
use playa_db::cache::ListingCache;
use playa_db::models::camp::CampChanges;
use playa_db::models::event::EventChanges;
use playa_db::models::occurrence::CreateOccurrence;
use playa_db::models::user::{CreateUser, User};
use playa_db::models::year::{CreateYear, Year};
use playa_db::repositories::{CampRepo, EventRepo, OccurrenceRepo, UserRepo, YearRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        listing_cache_ttl_secs: 86400,
        listing_cache_capacity: 64,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Mint a bearer token for the given user id with the test secret.
pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation")
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let listing_cache = Arc::new(ListingCache::new(
        config.listing_cache_capacity,
        Duration::from_secs(config.listing_cache_ttl_secs),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config),
        listing_cache,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(json_request(Method::POST, uri, None, body))
        .await
        .unwrap()
}

pub async fn auth_post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(json_request(Method::POST, uri, Some(token), body))
        .await
        .unwrap()
}

pub async fn auth_put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(json_request(Method::PUT, uri, Some(token), body))
        .await
        .unwrap()
}

pub async fn auth_delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

pub async fn seed_year(pool: &PgPool, label: &str) -> Year {
    YearRepo::create(
        pool,
        &CreateYear {
            year: label.to_string(),
            location: "Black Rock Desert".to_string(),
            participants: None,
            theme: None,
            notes: None,
            event_start: None,
            event_end: None,
        },
    )
    .await
    .expect("seed year")
}

pub async fn seed_user(pool: &PgPool, username: &str, api_allowed: bool) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            first_name: "Dusty".to_string(),
            last_name: "Tester".to_string(),
            is_active: true,
            api_allowed,
        },
    )
    .await
    .expect("seed user")
}

pub async fn seed_camp(pool: &PgPool, year_id: DbId, creator_id: DbId, name: &str) -> DbId {
    let changes = CampChanges {
        name: Some(name.to_string()),
        ..Default::default()
    };
    CampRepo::insert(pool, year_id, creator_id, &changes)
        .await
        .expect("seed camp")
        .id
}

/// Insert an accepted, publicly visible event.
pub async fn seed_public_event(
    pool: &PgPool,
    year_id: DbId,
    creator_id: DbId,
    title: &str,
) -> DbId {
    let changes = EventChanges {
        title: Some(title.to_string()),
        moderation: Some("A".to_string()),
        ..Default::default()
    };
    EventRepo::insert(pool, year_id, 1, creator_id, &changes)
        .await
        .expect("seed event")
        .id
}

pub async fn seed_occurrence(
    pool: &PgPool,
    event_id: DbId,
    start_time: Timestamp,
    end_time: Timestamp,
    notes: &str,
) {
    OccurrenceRepo::create(
        pool,
        &CreateOccurrence {
            event_id,
            start_time,
            end_time,
            notes: Some(notes.to_string()),
        },
    )
    .await
    .expect("seed occurrence");
}
