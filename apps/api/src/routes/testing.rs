//! In-process repositories and request helpers for router tests.
//!
//! The repositories keep documents in memory and record every `save` and
//! `save_all` call so tests can assert on what reached the store.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use futures_util::stream::{self, BoxStream, StreamExt};
use serde_json::Value;
use tower::ServiceExt;

use storefront_core::{Category, Vendor};
use storefront_db::{CategoryRepository, DbError, DbResult, VendorRepository};

const ASSIGNED_ID: &str = "assigned-id";

#[derive(Default)]
pub struct RecordingCategoryRepository {
    stored: Mutex<Vec<Category>>,
    saves: Mutex<Vec<Category>>,
    batches: Mutex<Vec<Vec<Category>>>,
    fail: bool,
}

impl RecordingCategoryRepository {
    pub fn with(stored: Vec<Category>) -> Self {
        RecordingCategoryRepository {
            stored: Mutex::new(stored),
            ..Default::default()
        }
    }

    /// Every call fails as if the store were unreachable.
    pub fn failing() -> Self {
        RecordingCategoryRepository {
            fail: true,
            ..Default::default()
        }
    }

    pub fn saves(&self) -> Vec<Category> {
        self.saves.lock().unwrap().clone()
    }

    pub fn batches(&self) -> Vec<Vec<Category>> {
        self.batches.lock().unwrap().clone()
    }

    fn check(&self) -> DbResult<()> {
        if self.fail {
            return Err(DbError::QueryFailed("store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for RecordingCategoryRepository {
    fn find_all(&self) -> BoxStream<'_, DbResult<Category>> {
        if let Err(e) = self.check() {
            return stream::iter(vec![Err(e)]).boxed();
        }
        let items = self.stored.lock().unwrap().clone();
        stream::iter(items.into_iter().map(Ok)).boxed()
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        self.check()?;
        let stored = self.stored.lock().unwrap();
        Ok(stored.iter().find(|c| c.id.as_deref() == Some(id)).cloned())
    }

    async fn save(&self, mut category: Category) -> DbResult<Category> {
        self.check()?;
        category.id.get_or_insert_with(|| ASSIGNED_ID.to_string());
        self.saves.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn save_all(&self, categories: Vec<Category>) -> DbResult<Vec<Category>> {
        self.check()?;
        self.batches.lock().unwrap().push(categories.clone());
        Ok(categories)
    }

    async fn count(&self) -> DbResult<i64> {
        self.check()?;
        Ok(self.stored.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct RecordingVendorRepository {
    stored: Mutex<Vec<Vendor>>,
    saves: Mutex<Vec<Vendor>>,
    batches: Mutex<Vec<Vec<Vendor>>>,
    fail: bool,
}

impl RecordingVendorRepository {
    pub fn with(stored: Vec<Vendor>) -> Self {
        RecordingVendorRepository {
            stored: Mutex::new(stored),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        RecordingVendorRepository {
            fail: true,
            ..Default::default()
        }
    }

    pub fn saves(&self) -> Vec<Vendor> {
        self.saves.lock().unwrap().clone()
    }

    pub fn batches(&self) -> Vec<Vec<Vendor>> {
        self.batches.lock().unwrap().clone()
    }

    fn check(&self) -> DbResult<()> {
        if self.fail {
            return Err(DbError::ConnectionFailed("Pool is closed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl VendorRepository for RecordingVendorRepository {
    fn find_all(&self) -> BoxStream<'_, DbResult<Vendor>> {
        if let Err(e) = self.check() {
            return stream::iter(vec![Err(e)]).boxed();
        }
        let items = self.stored.lock().unwrap().clone();
        stream::iter(items.into_iter().map(Ok)).boxed()
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<Vendor>> {
        self.check()?;
        let stored = self.stored.lock().unwrap();
        Ok(stored.iter().find(|v| v.id.as_deref() == Some(id)).cloned())
    }

    async fn save(&self, mut vendor: Vendor) -> DbResult<Vendor> {
        self.check()?;
        vendor.id.get_or_insert_with(|| ASSIGNED_ID.to_string());
        self.saves.lock().unwrap().push(vendor.clone());
        Ok(vendor)
    }

    async fn save_all(&self, vendors: Vec<Vendor>) -> DbResult<Vec<Vendor>> {
        self.check()?;
        self.batches.lock().unwrap().push(vendors.clone());
        Ok(vendors)
    }

    async fn count(&self) -> DbResult<i64> {
        self.check()?;
        Ok(self.stored.lock().unwrap().len() as i64)
    }
}

// =============================================================================
// Request Helpers
// =============================================================================

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends one request through the router and returns status and raw body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}
