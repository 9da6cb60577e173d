//! Repository for the `images` and `image_details` tables.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::image::{Image, ImageDetails, NewImage};

/// Column list for `images` queries.
const COLUMNS: &str = "id, blob_name, mime_type, created_at";

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Image>>;

    /// Return which of `ids` exist.
    async fn find_existing_ids(&self, ids: &[DbId]) -> RepoResult<Vec<DbId>>;

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Image>>;

    async fn list_details_by_streetcode(&self, streetcode_id: DbId)
        -> RepoResult<Vec<ImageDetails>>;

    async fn create(&self, input: &NewImage) -> RepoResult<Image>;

    async fn delete(&self, id: DbId) -> RepoResult<u64>;
}

/// PostgreSQL implementation of [`ImageRepository`].
#[derive(Clone)]
pub struct PgImageRepo {
    pool: PgPool,
}

impl PgImageRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepo {
    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Image>> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_existing_ids(&self, ids: &[DbId]) -> RepoResult<Vec<DbId>> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM images WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<Image>> {
        sqlx::query_as::<_, Image>(
            "SELECT i.id, i.blob_name, i.mime_type, i.created_at \
             FROM images i \
             JOIN streetcode_images si ON si.image_id = i.id \
             WHERE si.streetcode_id = $1 \
             ORDER BY i.id",
        )
        .bind(streetcode_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn list_details_by_streetcode(
        &self,
        streetcode_id: DbId,
    ) -> RepoResult<Vec<ImageDetails>> {
        sqlx::query_as::<_, ImageDetails>(
            "SELECT d.id, d.image_id, d.title, d.alt \
             FROM image_details d \
             JOIN streetcode_images si ON si.image_id = d.image_id \
             WHERE si.streetcode_id = $1 \
             ORDER BY d.id",
        )
        .bind(streetcode_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn create(&self, input: &NewImage) -> RepoResult<Image> {
        let query = format!(
            "INSERT INTO images (blob_name, mime_type) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(&input.blob_name)
            .bind(&input.mime_type)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
