//! Repository for the `news` table.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::news::{News, NewsInput};

/// Column list for `news` queries.
const COLUMNS: &str = "id, title, text, url, image_id, creation_date";

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// All news in creation order (oldest first).
    async fn list_all(&self) -> RepoResult<Vec<News>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<News>>;

    async fn find_by_url(&self, url: &str) -> RepoResult<Option<News>>;

    async fn create(&self, input: &NewsInput) -> RepoResult<News>;

    /// Returns `None` if no news with the given ID exists.
    async fn update(&self, id: DbId, input: &NewsInput) -> RepoResult<Option<News>>;

    async fn delete(&self, id: DbId) -> RepoResult<u64>;
}

/// PostgreSQL implementation of [`NewsRepository`].
#[derive(Clone)]
pub struct PgNewsRepo {
    pool: PgPool,
}

impl PgNewsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepo {
    async fn list_all(&self) -> RepoResult<Vec<News>> {
        let query = format!("SELECT {COLUMNS} FROM news ORDER BY creation_date, id");
        sqlx::query_as::<_, News>(&query).fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<News>> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_url(&self, url: &str) -> RepoResult<Option<News>> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE url = $1");
        sqlx::query_as::<_, News>(&query)
            .bind(url)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: &NewsInput) -> RepoResult<News> {
        let query = format!(
            "INSERT INTO news (title, text, url, image_id, creation_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(&input.text)
            .bind(&input.url)
            .bind(input.image_id)
            .bind(input.creation_date)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, id: DbId, input: &NewsInput) -> RepoResult<Option<News>> {
        let query = format!(
            "UPDATE news SET title = $2, text = $3, url = $4, image_id = $5, \
                creation_date = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.text)
            .bind(&input.url)
            .bind(input.image_id)
            .bind(input.creation_date)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
