//! # Vendor Routes
//!
//! CRUD endpoints for vendors. Same shape as the category routes; PATCH
//! merges `firstName` and `lastName` independently and saves only when
//! at least one of them changed.

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
use storefront_core::{Vendor, VendorPatch};
use storefront_db::VendorRepository;

pub const VENDORS: &str = "/api/v1/vendors";
pub const VENDOR: &str = "/api/v1/vendors/{id}";

type Repo = Arc<dyn VendorRepository>;

pub fn router(repository: Repo) -> Router {
    Router::new()
        .route(VENDORS, get(list).post(create))
        .route("/api/v1/vendors/", get(list))
        .route(VENDOR, get(get_by_id).put(update).patch(patch))
        .with_state(repository)
}

async fn list(State(repo): State<Repo>) -> ApiResult<Json<Vec<Vendor>>> {
    let vendors: Vec<Vendor> = repo.find_all().try_collect().await?;

    debug!(count = vendors.len(), "Listed vendors");
    Ok(Json(vendors))
}

async fn get_by_id(State(repo): State<Repo>, Path(id): Path<String>) -> ApiResult<Response> {
    let response = match repo.find_by_id(&id).await? {
        Some(vendor) => Json(vendor).into_response(),
        None => StatusCode::OK.into_response(),
    };
    Ok(response)
}

async fn create(
    State(repo): State<Repo>,
    Json(payload): Json<OneOrMany<Vendor>>,
) -> ApiResult<StatusCode> {
    let vendors: Vec<Vendor> = payload
        .into_vec()
        .into_iter()
        .map(|vendor| Vendor { id: None, ..vendor })
        .collect();

    let saved = repo.save_all(vendors).await?;

    info!(count = saved.len(), "Created vendors");
    Ok(StatusCode::CREATED)
}

async fn update(
    State(repo): State<Repo>,
    Path(id): Path<String>,
    Json(mut vendor): Json<Vendor>,
) -> ApiResult<Json<Vendor>> {
    vendor.id = Some(id);

    Ok(Json(repo.save(vendor).await?))
}

/// PATCH /api/v1/vendors/{id}
///
/// 404 when the id is unknown. Returns the stored vendor, merged.
async fn patch(
    State(repo): State<Repo>,
    Path(id): Path<String>,
    Json(patch): Json<VendorPatch>,
) -> ApiResult<Json<Vendor>> {
    let Some(mut vendor) = repo.find_by_id(&id).await? else {
        return Err(ApiError::not_found("Vendor", &id));
    };

    if vendor.merge(patch) {
        debug!(id = %id, "Vendor changed, saving");
        vendor = repo.save(vendor).await?;
    }

    Ok(Json(vendor))
}
