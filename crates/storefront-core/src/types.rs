//! # Domain Types
//!
//! The document types served by Storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Category     │   │     Vendor      │   Stored documents           │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  id (Option)    │   │  id (Option)    │                              │
//! │  │  description    │   │  firstName      │                              │
//! │  │                 │   │  lastName       │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  CategoryPatch  │   │   VendorPatch   │   PATCH payloads             │
//! │  │  ─────────────  │   │  ─────────────  │   (every field optional)     │
//! │  │  description?   │   │  firstName?     │                              │
//! │  │                 │   │  lastName?      │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is the only identity key. `None` means the document has never been
//! saved; the store assigns an id on first save and it never changes after.
//!
//! ## Merge Rule
//! ```text
//! incoming field │ stored field │ result
//! ───────────────┼──────────────┼──────────────────────────
//! None           │ anything     │ untouched, not a change
//! Some(v)        │ == v         │ untouched, not a change
//! Some(v)        │ != v         │ overwritten, a change
//! ```
//! A merge reports `true` when at least one field changed. Callers persist
//! the document only in that case.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Category
// =============================================================================

/// A product category, e.g. "Fruits".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
#[ts(export)]
pub struct Category {
    /// Document id. `None` until first saved.
    pub id: Option<String>,

    /// Display text for the category.
    pub description: String,
}

impl Category {
    /// Creates an unsaved category.
    pub fn new(description: impl Into<String>) -> Self {
        Category {
            id: None,
            description: description.into(),
        }
    }

    /// Sets the id, consuming the category.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns true if this category has never been saved.
    #[inline]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Applies a partial update.
    ///
    /// ## Returns
    /// `true` if at least one field was changed, `false` if the patch
    /// carried nothing new.
    pub fn merge(&mut self, patch: CategoryPatch) -> bool {
        merge_field(&mut self.description, patch.description)
    }
}

/// Partial update payload for a [`Category`].
///
/// Any `id` sent in the body is ignored; the path id wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CategoryPatch {
    pub description: Option<String>,
}

impl CategoryPatch {
    /// Patch that sets only the description.
    pub fn description(description: impl Into<String>) -> Self {
        CategoryPatch {
            description: Some(description.into()),
        }
    }
}

// =============================================================================
// Vendor
// =============================================================================

/// A vendor supplying products.
///
/// ## JSON Shape
/// ```json
/// { "id": "…", "firstName": "Joe", "lastName": "Buck" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Vendor {
    /// Document id. `None` until first saved.
    pub id: Option<String>,

    pub first_name: String,

    pub last_name: String,
}

impl Vendor {
    /// Creates an unsaved vendor.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Vendor {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Sets the id, consuming the vendor.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns true if this vendor has never been saved.
    #[inline]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Applies a partial update.
    ///
    /// Both name fields are checked; every differing field is applied,
    /// not just the first one found.
    ///
    /// ## Returns
    /// `true` if at least one field was changed.
    pub fn merge(&mut self, patch: VendorPatch) -> bool {
        let first = merge_field(&mut self.first_name, patch.first_name);
        let last = merge_field(&mut self.last_name, patch.last_name);
        first || last
    }
}

/// Partial update payload for a [`Vendor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct VendorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl VendorPatch {
    /// Patch that sets only the first name.
    pub fn first_name(first_name: impl Into<String>) -> Self {
        VendorPatch {
            first_name: Some(first_name.into()),
            last_name: None,
        }
    }

    /// Patch that sets only the last name.
    pub fn last_name(last_name: impl Into<String>) -> Self {
        VendorPatch {
            first_name: None,
            last_name: Some(last_name.into()),
        }
    }
}

// =============================================================================
// Merge Helpers
// =============================================================================

/// Overwrites `target` with `incoming` when it is present and different.
fn merge_field(target: &mut String, incoming: Option<String>) -> bool {
    match incoming {
        Some(value) if *target != value => {
            *target = value;
            true
        }
        _ => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_merge_identical_is_noop() {
        let mut category = Category::new("Description").with_id("asdfasdf");
        let changed = category.merge(CategoryPatch::description("Description"));

        assert!(!changed);
        assert_eq!(category.description, "Description");
    }

    #[test]
    fn test_category_merge_applies_new_description() {
        let mut category = Category::new("Description").with_id("asdfasdf");
        let changed = category.merge(CategoryPatch::description("New Description"));

        assert!(changed);
        assert_eq!(category.description, "New Description");
        assert_eq!(category.id.as_deref(), Some("asdfasdf"));
    }

    #[test]
    fn test_category_merge_empty_patch_is_noop() {
        let mut category = Category::new("Fruits");
        assert!(!category.merge(CategoryPatch::default()));
    }

    #[test]
    fn test_empty_string_counts_as_a_value() {
        let mut category = Category::new("Fruits");
        assert!(category.merge(CategoryPatch::description("")));
        assert_eq!(category.description, "");
    }

    #[test]
    fn test_vendor_merge_first_name() {
        let mut vendor = Vendor::new("Jimmy", "Johns");
        assert!(vendor.merge(VendorPatch::first_name("Jim")));
        assert_eq!(vendor.first_name, "Jim");
        assert_eq!(vendor.last_name, "Johns");
    }

    #[test]
    fn test_vendor_merge_identical_is_noop() {
        let mut vendor = Vendor::new("Jimmy", "Johns");
        assert!(!vendor.merge(VendorPatch::first_name("Jimmy")));

        let full = VendorPatch {
            first_name: Some("Jimmy".to_string()),
            last_name: Some("Johns".to_string()),
        };
        assert!(!vendor.merge(full));
    }

    #[test]
    fn test_vendor_merge_applies_every_differing_field() {
        let mut vendor = Vendor::new("Jimmy", "Johns");
        let patch = VendorPatch {
            first_name: Some("Jim".to_string()),
            last_name: Some("Jones".to_string()),
        };

        assert!(vendor.merge(patch));
        assert_eq!(vendor.first_name, "Jim");
        assert_eq!(vendor.last_name, "Jones");
    }

    #[test]
    fn test_vendor_merge_only_last_name_differs() {
        let mut vendor = Vendor::new("Jimmy", "Johns");
        let patch = VendorPatch {
            first_name: Some("Jimmy".to_string()),
            last_name: Some("Buffett".to_string()),
        };

        assert!(vendor.merge(patch));
        assert_eq!(vendor.first_name, "Jimmy");
        assert_eq!(vendor.last_name, "Buffett");
    }

    #[test]
    fn test_vendor_json_is_camel_case() {
        let vendor = Vendor::new("Joe", "Buck").with_id("v-1");
        let json = serde_json::to_value(&vendor).unwrap();

        assert_eq!(json["id"], "v-1");
        assert_eq!(json["firstName"], "Joe");
        assert_eq!(json["lastName"], "Buck");
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let category: Category = serde_json::from_str("{}").unwrap();
        assert!(category.is_new());
        assert_eq!(category.description, "");

        let patch: VendorPatch = serde_json::from_str(r#"{"lastName":"Rubble"}"#).unwrap();
        assert_eq!(patch, VendorPatch::last_name("Rubble"));
    }

    #[test]
    fn test_patch_ignores_body_id() {
        let patch: CategoryPatch =
            serde_json::from_str(r#"{"id":"other","description":"Nuts"}"#).unwrap();
        assert_eq!(patch, CategoryPatch::description("Nuts"));
    }
}
