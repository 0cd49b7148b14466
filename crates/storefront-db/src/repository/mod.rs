//! # Repository Module
//!
//! Storage access for Storefront documents.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  repo.find_by_id("abc").await                                  │
//! │       ▼                                                                 │
//! │  dyn CategoryRepository          (trait object, shared via Arc)        │
//! │  ├── find_all(&self)             → stream of documents                 │
//! │  ├── find_by_id(&self, id)       → Option<document>                    │
//! │  ├── save(&self, doc)            → doc with id assigned                │
//! │  └── save_all(&self, docs)       → docs with ids assigned              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SqliteCategoryRepository        (this crate)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers depend on the traits, not the SQLite types, so tests can swap
//! in an in-process repository and count the calls it receives.
//!
//! ## Save Semantics
//! `save` assigns a fresh id when the document has none, otherwise it
//! overwrites the stored document with the same id (inserting it if no such
//! document exists yet).

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use storefront_core::{Category, Vendor};

use crate::error::DbResult;

pub mod category;
pub mod vendor;

/// Storage operations for [`Category`] documents.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Streams every stored category, in no particular order.
    fn find_all(&self) -> BoxStream<'_, DbResult<Category>>;

    /// Looks up a category by id.
    async fn find_by_id(&self, id: &str) -> DbResult<Option<Category>>;

    /// Inserts or overwrites a category, returning it with its id.
    async fn save(&self, category: Category) -> DbResult<Category>;

    /// Saves every category in one batch.
    async fn save_all(&self, categories: Vec<Category>) -> DbResult<Vec<Category>>;

    /// Counts stored categories.
    async fn count(&self) -> DbResult<i64>;
}

/// Storage operations for [`Vendor`] documents.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Streams every stored vendor, in no particular order.
    fn find_all(&self) -> BoxStream<'_, DbResult<Vendor>>;

    /// Looks up a vendor by id.
    async fn find_by_id(&self, id: &str) -> DbResult<Option<Vendor>>;

    /// Inserts or overwrites a vendor, returning it with its id.
    async fn save(&self, vendor: Vendor) -> DbResult<Vendor>;

    /// Saves every vendor in one batch.
    async fn save_all(&self, vendors: Vec<Vendor>) -> DbResult<Vec<Vendor>>;

    /// Counts stored vendors.
    async fn count(&self) -> DbResult<i64>;
}
