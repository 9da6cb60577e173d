//! Repository for the `tags` table.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::tag::{StreetcodeTag, Tag};

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn list_all(&self) -> RepoResult<Vec<Tag>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Tag>>;

    /// Tags attached to a streetcode, ordered by their position.
    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<StreetcodeTag>>;
}

/// PostgreSQL implementation of [`TagRepository`].
#[derive(Clone)]
pub struct PgTagRepo {
    pool: PgPool,
}

impl PgTagRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepo {
    async fn list_all(&self) -> RepoResult<Vec<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT id, title FROM tags ORDER BY title")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT id, title FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_by_streetcode(&self, streetcode_id: DbId) -> RepoResult<Vec<StreetcodeTag>> {
        sqlx::query_as::<_, StreetcodeTag>(
            "SELECT t.id, t.title, sti.is_visible, sti.index \
             FROM tags t \
             JOIN streetcode_tag_index sti ON sti.tag_id = t.id \
             WHERE sti.streetcode_id = $1 \
             ORDER BY sti.index, t.id",
        )
        .bind(streetcode_id)
        .fetch_all(&self.pool)
        .await
    }
}
