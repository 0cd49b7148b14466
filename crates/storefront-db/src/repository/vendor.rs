//! # Vendor Repository
//!
//! SQLite-backed storage for vendors. Mirrors the category repository;
//! the only difference is the two name columns.

use async_trait::async_trait;
use futures_util::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::VendorRepository;
use storefront_core::{new_document_id, Vendor};

const UPSERT_VENDOR: &str = r#"
    INSERT INTO vendors (id, first_name, last_name)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(id) DO UPDATE SET
        first_name = excluded.first_name,
        last_name = excluded.last_name
"#;

/// Repository for vendor database operations.
#[derive(Debug, Clone)]
pub struct SqliteVendorRepository {
    pool: SqlitePool,
}

impl SqliteVendorRepository {
    /// Creates a new SqliteVendorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteVendorRepository { pool }
    }
}

#[async_trait]
impl VendorRepository for SqliteVendorRepository {
    fn find_all(&self) -> BoxStream<'_, DbResult<Vendor>> {
        debug!("Streaming all vendors");

        sqlx::query_as::<_, Vendor>("SELECT id, first_name, last_name FROM vendors")
            .fetch(&self.pool)
            .map_err(DbError::from)
            .boxed()
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<Vendor>> {
        let vendor = sqlx::query_as::<_, Vendor>(
            "SELECT id, first_name, last_name FROM vendors WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vendor)
    }

    async fn save(&self, mut vendor: Vendor) -> DbResult<Vendor> {
        let id = vendor.id.get_or_insert_with(new_document_id).clone();
        debug!(id = %id, "Saving vendor");

        sqlx::query(UPSERT_VENDOR)
            .bind(&id)
            .bind(&vendor.first_name)
            .bind(&vendor.last_name)
            .execute(&self.pool)
            .await?;

        Ok(vendor)
    }

    async fn save_all(&self, vendors: Vec<Vendor>) -> DbResult<Vec<Vendor>> {
        debug!(count = vendors.len(), "Saving vendor batch");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let mut saved = Vec::with_capacity(vendors.len());
        for mut vendor in vendors {
            let id = vendor.id.get_or_insert_with(new_document_id).clone();

            sqlx::query(UPSERT_VENDOR)
                .bind(&id)
                .bind(&vendor.first_name)
                .bind(&vendor.last_name)
                .execute(&mut *tx)
                .await?;

            saved.push(vendor);
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(saved)
    }

    async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
