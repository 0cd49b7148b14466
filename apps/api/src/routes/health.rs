//! Liveness probe.
//!
//! `GET /api/health` answers `200 OK` when the store executes a trivial
//! query and `503 Service Unavailable` otherwise.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::warn;

use storefront_db::Database;

pub const HEALTH: &str = "/api/health";

pub fn router(db: Database) -> Router {
    Router::new().route(HEALTH, get(health)).with_state(db)
}

async fn health(State(db): State<Database>) -> (StatusCode, &'static str) {
    if db.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        warn!("Health check failed: database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
    }
}
