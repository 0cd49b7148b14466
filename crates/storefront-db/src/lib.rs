//! # storefront-db: Database Layer for Storefront
//!
//! This crate provides storage for categories and vendors.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  HTTP handler (PATCH /api/v1/categories/{id})                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storefront-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐  ┌──────────────┐  │   │
//! │  │   │   Database    │    │   Repositories   │  │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                  │  │  (embedded)  │  │   │
//! │  │   │               │    │ CategoryRepo     │  │ 001_init.sql │  │   │
//! │  │   │ SqlitePool    │◄───│ VendorRepo       │  │              │  │   │
//! │  │   └───────────────┘    └──────────────────┘  └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository traits and SQLite implementations
//! - [`seed`] - Sample data bootstrap
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_db::{CategoryRepository, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("storefront.db")).await?;
//!
//! let saved = db.categories().save(Category::new("Fruits")).await?;
//! let found = db.categories().find_by_id(saved.id.as_deref().unwrap()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::category::SqliteCategoryRepository;
pub use repository::vendor::SqliteVendorRepository;
pub use repository::{CategoryRepository, VendorRepository};
