//! # Sample Data
//!
//! Loads a small set of categories and vendors into an empty store.
//! Used by the `seed` binary and by the API when `STOREFRONT_SEED=true`.
//!
//! Each collection is only seeded while it is empty, so running the
//! bootstrap twice never duplicates documents.

use tracing::info;

use crate::error::DbResult;
use crate::repository::{CategoryRepository, VendorRepository};
use storefront_core::{Category, Vendor};

/// Sample category descriptions.
pub const SAMPLE_CATEGORIES: &[&str] = &["Fruits", "Dried", "Fresh", "Exotic", "Nuts"];

/// Sample vendor names as `(first, last)`.
pub const SAMPLE_VENDORS: &[(&str, &str)] = &[
    ("Joe", "Buck"),
    ("Michael", "Weston"),
    ("Jessie", "Waters"),
    ("Bill", "Nershi"),
    ("Jimmy", "Buffett"),
];

/// How many documents a bootstrap run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub vendors: usize,
}

/// Seeds categories if none are stored. Returns the number inserted.
pub async fn seed_categories(repo: &dyn CategoryRepository) -> DbResult<usize> {
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, "Categories already present, skipping seed");
        return Ok(0);
    }

    let categories = SAMPLE_CATEGORIES
        .iter()
        .map(|description| Category::new(*description))
        .collect();
    let saved = repo.save_all(categories).await?;

    info!(count = saved.len(), "Seeded categories");
    Ok(saved.len())
}

/// Seeds vendors if none are stored. Returns the number inserted.
pub async fn seed_vendors(repo: &dyn VendorRepository) -> DbResult<usize> {
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, "Vendors already present, skipping seed");
        return Ok(0);
    }

    let vendors = SAMPLE_VENDORS
        .iter()
        .map(|(first, last)| Vendor::new(*first, *last))
        .collect();
    let saved = repo.save_all(vendors).await?;

    info!(count = saved.len(), "Seeded vendors");
    Ok(saved.len())
}

/// Seeds both collections.
pub async fn seed_all(
    categories: &dyn CategoryRepository,
    vendors: &dyn VendorRepository,
) -> DbResult<SeedReport> {
    Ok(SeedReport {
        categories: seed_categories(categories).await?,
        vendors: seed_vendors(vendors).await?,
    })
}
