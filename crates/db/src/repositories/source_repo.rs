//! Repository for source link categories and their streetcode content.

use async_trait::async_trait;
use sqlx::PgPool;
use streetcode_core::types::DbId;

use super::RepoResult;
use crate::models::source::{SourceLinkCategory, StreetcodeCategoryContent};

#[async_trait]
pub trait SourceRepository: Send + Sync {
    async fn list_categories(&self) -> RepoResult<Vec<SourceLinkCategory>>;

    async fn find_category(&self, id: DbId) -> RepoResult<Option<SourceLinkCategory>>;

    /// Categories that have content for the given streetcode.
    async fn list_categories_by_streetcode(
        &self,
        streetcode_id: DbId,
    ) -> RepoResult<Vec<SourceLinkCategory>>;

    async fn find_content(
        &self,
        streetcode_id: DbId,
        category_id: DbId,
    ) -> RepoResult<Option<StreetcodeCategoryContent>>;
}

/// PostgreSQL implementation of [`SourceRepository`].
#[derive(Clone)]
pub struct PgSourceRepo {
    pool: PgPool,
}

impl PgSourceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SourceRepository for PgSourceRepo {
    async fn list_categories(&self) -> RepoResult<Vec<SourceLinkCategory>> {
        sqlx::query_as::<_, SourceLinkCategory>(
            "SELECT id, title, image_id FROM source_link_categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_category(&self, id: DbId) -> RepoResult<Option<SourceLinkCategory>> {
        sqlx::query_as::<_, SourceLinkCategory>(
            "SELECT id, title, image_id FROM source_link_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list_categories_by_streetcode(
        &self,
        streetcode_id: DbId,
    ) -> RepoResult<Vec<SourceLinkCategory>> {
        sqlx::query_as::<_, SourceLinkCategory>(
            "SELECT c.id, c.title, c.image_id \
             FROM source_link_categories c \
             JOIN streetcode_category_contents scc ON scc.source_link_category_id = c.id \
             WHERE scc.streetcode_id = $1 \
             ORDER BY c.id",
        )
        .bind(streetcode_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn find_content(
        &self,
        streetcode_id: DbId,
        category_id: DbId,
    ) -> RepoResult<Option<StreetcodeCategoryContent>> {
        sqlx::query_as::<_, StreetcodeCategoryContent>(
            "SELECT source_link_category_id, streetcode_id, text \
             FROM streetcode_category_contents \
             WHERE streetcode_id = $1 AND source_link_category_id = $2",
        )
        .bind(streetcode_id)
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
    }
}
