//! # Storefront API
//!
//! JSON HTTP API over categories and vendors.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Routers                                     │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │  /api/v1/categories          │  │  /api/v1/vendors             │    │
//! │  │                              │  │                              │    │
//! │  │ • GET    list                │  │ • GET    list                │    │
//! │  │ • GET    /{id}               │  │ • GET    /{id}               │    │
//! │  │ • POST   create (201)        │  │ • POST   create (201)        │    │
//! │  │ • PUT    /{id} replace       │  │ • PUT    /{id} replace       │    │
//! │  │ • PATCH  /{id} merge         │  │ • PATCH  /{id} merge         │    │
//! │  └──────────────┬───────────────┘  └──────────────┬───────────────┘    │
//! │                 │                                 │                     │
//! │                 ▼                                 ▼                     │
//! │       Arc<dyn CategoryRepository>      Arc<dyn VendorRepository>        │
//! │                                                                         │
//! │  ┌──────────────────────────────┐                                      │
//! │  │  /api/health                 │ ── Database::health_check()          │
//! │  └──────────────────────────────┘                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories are wired in explicitly through [`AppState`]; each entity
//! router owns its repository handle as axum state.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use storefront_db::{CategoryRepository, Database, VendorRepository};

pub mod config;
pub mod error;
pub mod routes;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};

/// Repository handles shared by the routers.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub vendors: Arc<dyn VendorRepository>,
}

impl AppState {
    /// Wires the SQLite repositories of `db`.
    pub fn from_database(db: &Database) -> Self {
        AppState {
            categories: Arc::new(db.categories()),
            vendors: Arc::new(db.vendors()),
        }
    }
}

/// Category and vendor routes, without middleware.
pub fn api_router(state: &AppState) -> Router {
    Router::new()
        .merge(routes::category::router(state.categories.clone()))
        .merge(routes::vendor::router(state.vendors.clone()))
}

/// The full application: API routes, health check, tracing and CORS layers.
pub fn build_app(state: AppState, db: Database) -> Router {
    api_router(&state)
        .merge(routes::health::router(db))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
