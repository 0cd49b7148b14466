//! # Category Repository
//!
//! SQLite-backed storage for categories.

use async_trait::async_trait;
use futures_util::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::CategoryRepository;
use storefront_core::{new_document_id, Category};

const UPSERT_CATEGORY: &str = r#"
    INSERT INTO categories (id, description)
    VALUES (?1, ?2)
    ON CONFLICT(id) DO UPDATE SET description = excluded.description
"#;

/// Repository for category database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqliteCategoryRepository::new(pool);
///
/// let saved = repo.save(Category::new("Fruits")).await?;
/// let found = repo.find_by_id(saved.id.as_deref().unwrap()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Creates a new SqliteCategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteCategoryRepository { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    fn find_all(&self) -> BoxStream<'_, DbResult<Category>> {
        debug!("Streaming all categories");

        sqlx::query_as::<_, Category>("SELECT id, description FROM categories")
            .fetch(&self.pool)
            .map_err(DbError::from)
            .boxed()
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, description FROM categories WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn save(&self, mut category: Category) -> DbResult<Category> {
        let id = category.id.get_or_insert_with(new_document_id).clone();
        debug!(id = %id, "Saving category");

        sqlx::query(UPSERT_CATEGORY)
            .bind(&id)
            .bind(&category.description)
            .execute(&self.pool)
            .await?;

        Ok(category)
    }

    async fn save_all(&self, categories: Vec<Category>) -> DbResult<Vec<Category>> {
        debug!(count = categories.len(), "Saving category batch");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let mut saved = Vec::with_capacity(categories.len());
        for mut category in categories {
            let id = category.id.get_or_insert_with(new_document_id).clone();

            sqlx::query(UPSERT_CATEGORY)
                .bind(&id)
                .bind(&category.description)
                .execute(&mut *tx)
                .await?;

            saved.push(category);
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(saved)
    }

    async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> SqliteCategoryRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.categories()
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = repo().await;

        let saved = repo.save(Category::new("Fruits")).await.unwrap();

        let id = saved.id.clone().expect("id assigned on save");
        let found = repo.find_by_id(&id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let repo = repo().await;
        let saved = repo.save(Category::new("Fruits")).await.unwrap();
        let id = saved.id.clone().unwrap();

        repo.save(Category::new("Dried").with_id(id.clone()))
            .await
            .unwrap();

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.description, "Dried");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_inserts() {
        let repo = repo().await;

        let saved = repo
            .save(Category::new("Exotic").with_id("asdfasdf"))
            .await
            .unwrap();

        assert_eq!(saved.id.as_deref(), Some("asdfasdf"));
        assert!(repo.find_by_id("asdfasdf").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = repo().await;
        assert_eq!(repo.find_by_id("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_streams_every_category() {
        let repo = repo().await;
        repo.save_all(vec![Category::new("Cat1"), Category::new("Cat2")])
            .await
            .unwrap();

        let all: Vec<Category> = repo.find_all().try_collect().await.unwrap();

        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|c| !c.is_new()));
    }

    #[tokio::test]
    async fn test_find_all_empty_store() {
        let repo = repo().await;
        let all: Vec<Category> = repo.find_all().try_collect().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_save_all_returns_ids() {
        let repo = repo().await;

        let saved = repo
            .save_all(vec![Category::new("Fresh"), Category::new("Nuts")])
            .await
            .unwrap();

        assert_eq!(saved.len(), 2);
        assert_ne!(saved[0].id, saved[1].id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
