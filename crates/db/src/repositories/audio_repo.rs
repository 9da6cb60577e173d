//! Repository for the `audios` table.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::audio::{Audio, NewAudio};

/// Column list for `audios` queries.
const COLUMNS: &str = "id, title, blob_name, mime_type, created_at";

#[async_trait]
pub trait AudioRepository: Send + Sync {
    async fn list_all(&self) -> RepoResult<Vec<Audio>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Audio>>;

    async fn create(&self, input: &NewAudio) -> RepoResult<Audio>;

    async fn delete(&self, id: DbId) -> RepoResult<u64>;
}

/// PostgreSQL implementation of [`AudioRepository`].
#[derive(Clone)]
pub struct PgAudioRepo {
    pool: PgPool,
}

impl PgAudioRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AudioRepository for PgAudioRepo {
    async fn list_all(&self) -> RepoResult<Vec<Audio>> {
        let query = format!("SELECT {COLUMNS} FROM audios ORDER BY id");
        sqlx::query_as::<_, Audio>(&query).fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Audio>> {
        let query = format!("SELECT {COLUMNS} FROM audios WHERE id = $1");
        sqlx::query_as::<_, Audio>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: &NewAudio) -> RepoResult<Audio> {
        let query = format!(
            "INSERT INTO audios (title, blob_name, mime_type) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Audio>(&query)
            .bind(&input.title)
            .bind(&input.blob_name)
            .bind(&input.mime_type)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM audios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
