//! # storefront-core: Pure Domain Types for Storefront
//!
//! This crate holds the two document types served by the API and the
//! merge rule used by partial updates. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Clients                                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum routers)                      │   │
//! │  │    /api/v1/categories, /api/v1/vendors                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐    │   │
//! │  │   │   Category    │   │    Vendor     │   │  merge rules  │    │   │
//! │  │   │ CategoryPatch │   │  VendorPatch  │   │ (patch diff)  │    │   │
//! │  │   └───────────────┘   └───────────────┘   └───────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Document types (Category, Vendor) and their patch payloads
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Category, CategoryPatch};
//!
//! let mut stored = Category::new("Fruits").with_id("cat-1");
//!
//! // Same value: nothing to persist
//! assert!(!stored.merge(CategoryPatch::description("Fruits")));
//!
//! // New value: merged, caller should save
//! assert!(stored.merge(CategoryPatch::description("Fresh Fruits")));
//! assert_eq!(stored.description, "Fresh Fruits");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use types::*;

// =============================================================================
// Identifiers
// =============================================================================

/// Generates a new document id.
///
/// Ids are UUID v4 strings, assigned when a document is first saved.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_id_is_unique() {
        let a = new_document_id();
        let b = new_document_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
