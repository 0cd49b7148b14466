//! # Category Routes
//!
//! CRUD endpoints for categories.
//!
//! ## Partial Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    PATCH /api/v1/categories/{id}                        │
//! │                                                                         │
//! │  body: { "description": "New Description" }                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.find_by_id(id) ──► None? ──► 404 NOT_FOUND                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stored.merge(patch)                                                   │
//! │       │                                                                 │
//! │       ├── changed   ──► repo.save(stored) ──► 200 + saved category     │
//! │       │                                                                 │
//! │       └── unchanged ──► (no save)         ──► 200 + stored category    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use futures_util::TryStreamExt;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::routes::OneOrMany;
use storefront_core::{Category, CategoryPatch};
use storefront_db::CategoryRepository;

/// Collection path.
pub const CATEGORIES: &str = "/api/v1/categories";

/// Single document path.
pub const CATEGORY: &str = "/api/v1/categories/{id}";

type Repo = Arc<dyn CategoryRepository>;

/// Builds the category router around its repository.
pub fn router(repository: Repo) -> Router {
    Router::new()
        .route(CATEGORIES, get(list).post(create))
        .route("/api/v1/categories/", get(list))
        .route(CATEGORY, get(get_by_id).put(update).patch(patch))
        .with_state(repository)
}

/// GET /api/v1/categories
async fn list(State(repo): State<Repo>) -> ApiResult<Json<Vec<Category>>> {
    let categories: Vec<Category> = repo.find_all().try_collect().await?;

    debug!(count = categories.len(), "Listed categories");
    Ok(Json(categories))
}

/// GET /api/v1/categories/{id}
///
/// An unknown id answers 200 with an empty body.
async fn get_by_id(State(repo): State<Repo>, Path(id): Path<String>) -> ApiResult<Response> {
    debug!(id = %id, "get category by id");

    let response = match repo.find_by_id(&id).await? {
        Some(category) => Json(category).into_response(),
        None => StatusCode::OK.into_response(),
    };
    Ok(response)
}

/// POST /api/v1/categories
///
/// Ids in the payload are dropped; the store assigns fresh ones.
async fn create(
    State(repo): State<Repo>,
    Json(payload): Json<OneOrMany<Category>>,
) -> ApiResult<StatusCode> {
    let categories: Vec<Category> = payload
        .into_vec()
        .into_iter()
        .map(|category| Category { id: None, ..category })
        .collect();

    let saved = repo.save_all(categories).await?;

    info!(count = saved.len(), "Created categories");
    Ok(StatusCode::CREATED)
}

/// PUT /api/v1/categories/{id}
async fn update(
    State(repo): State<Repo>,
    Path(id): Path<String>,
    Json(mut category): Json<Category>,
) -> ApiResult<Json<Category>> {
    category.id = Some(id);

    let saved = repo.save(category).await?;

    debug!(id = ?saved.id, "Replaced category");
    Ok(Json(saved))
}

/// PATCH /api/v1/categories/{id}
async fn patch(
    State(repo): State<Repo>,
    Path(id): Path<String>,
    Json(patch): Json<CategoryPatch>,
) -> ApiResult<Json<Category>> {
    let mut category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Category", &id))?;

    if category.merge(patch) {
        debug!(id = %id, "Category changed, saving");
        category = repo.save(category).await?;
    } else {
        debug!(id = %id, "Category unchanged, skipping save");
    }

    Ok(Json(category))
}
