//! Shared helpers for API integration tests.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use boxoffice_core::types::DbId;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use boxoffice_api::config::ServerConfig;
use boxoffice_api::router::build_app_router;
use boxoffice_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert an event and return its ID.
pub async fn seed_event(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO events (name, venue, starts_at_utc) \
         VALUES ($1, 'Test Hall', NOW() + INTERVAL '30 days') \
         RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a tier with full availability and return its ID.
pub async fn seed_tier(
    pool: &PgPool,
    event_id: DbId,
    tier: &str,
    price_cents: i32,
    total_quantity: i32,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO ticket_tiers (event_id, tier, price_cents, total_quantity, remaining_quantity) \
         VALUES ($1, $2, $3, $4, $4) \
         RETURNING id",
    )
    .bind(event_id)
    .bind(tier)
    .bind(price_cents)
    .bind(total_quantity)
    .fetch_one(pool)
    .await
    .unwrap()
}
